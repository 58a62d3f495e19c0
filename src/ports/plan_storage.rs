//! Plan Storage Port - Interface for persisting the travel plan record.
//!
//! The original flow keeps exactly one plan record, overwritten wholesale
//! on each onboarding completion. Adapters decide where that record lives
//! (a JSON file, memory for tests).

use async_trait::async_trait;

use crate::domain::trip_plan::TravelPlan;

/// Errors that can occur during plan storage operations
#[derive(Debug, thiserror::Error)]
pub enum PlanStorageError {
    #[error("No travel plan has been saved")]
    NotFound,

    #[error("Failed to serialize plan: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize plan: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading the single travel plan record
#[async_trait]
pub trait PlanStorage: Send + Sync {
    /// Save the plan, replacing any previously stored record
    ///
    /// # Errors
    /// Returns `PlanStorageError` if save fails
    async fn save(&self, plan: &TravelPlan) -> Result<(), PlanStorageError>;

    /// Load the stored plan
    ///
    /// # Errors
    /// Returns `PlanStorageError::NotFound` if no plan has been saved
    async fn load(&self) -> Result<TravelPlan, PlanStorageError>;

    /// Check whether a plan record exists
    async fn exists(&self) -> Result<bool, PlanStorageError>;

    /// Delete the stored plan, if any
    ///
    /// # Errors
    /// Returns `PlanStorageError` if deletion fails
    async fn delete(&self) -> Result<(), PlanStorageError>;
}
