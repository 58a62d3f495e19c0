//! Command and query handlers.

pub mod onboarding;
pub mod trip_plan;

pub use onboarding::{
    CompleteOnboardingCommand, CompleteOnboardingHandler, CompleteOnboardingResult,
    RestartOnboardingHandler,
};
pub use trip_plan::GetTripPlanHandler;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::PlanStorageError;

/// Translates storage failures into domain errors.
pub(crate) fn storage_error(err: PlanStorageError) -> DomainError {
    match err {
        PlanStorageError::NotFound => {
            DomainError::new(ErrorCode::PlanNotFound, "No travel plan has been saved")
        }
        PlanStorageError::SerializationFailed(msg) | PlanStorageError::DeserializationFailed(msg) => {
            DomainError::new(ErrorCode::SerializationError, msg)
        }
        PlanStorageError::IoError(msg) => DomainError::new(ErrorCode::StorageError, msg),
    }
}
