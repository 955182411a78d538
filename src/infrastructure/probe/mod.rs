//! Outbound probe implementations.

pub mod http_link_checker;

pub use http_link_checker::HttpLinkChecker;
