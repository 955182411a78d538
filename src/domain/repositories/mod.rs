//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod batch_repository;

pub use batch_repository::BatchRepository;

#[cfg(test)]
pub use batch_repository::MockBatchRepository;
