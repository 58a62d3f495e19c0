//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod plan_storage;

pub use plan_storage::{PlanStorage, PlanStorageError};
