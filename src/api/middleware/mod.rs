//! Middleware applied to API routes.

pub mod tracing;
