//! Foundation - shared domain primitives.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::PlanId;
