//! Core domain entities.

pub mod batch;

pub use batch::{LinkBatch, LinkCheck, LinkStatus};
