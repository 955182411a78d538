//! Infrastructure layer: storage and outbound probe adapters.

pub mod persistence;
pub mod probe;
