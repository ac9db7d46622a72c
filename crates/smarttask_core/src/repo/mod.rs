//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage contract the registry service works against.
//! - Keep arena/index bookkeeping out of the service layer.
//!
//! # Invariants
//! - Repositories never assign ids; callers hand in fully built tasks.
//! - Listing preserves insertion order.

pub mod task_repo;
