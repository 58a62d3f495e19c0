//! In-Memory Plan Storage Adapter
//!
//! Stores the travel plan record in memory. Useful for testing and
//! development.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::trip_plan::TravelPlan;
use crate::ports::{PlanStorage, PlanStorageError};

/// In-memory storage for the travel plan record
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanStorage {
    plan: Arc<RwLock<Option<TravelPlan>>>,
}

impl InMemoryPlanStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the stored plan (useful for tests)
    pub async fn clear(&self) {
        *self.plan.write().await = None;
    }
}

#[async_trait]
impl PlanStorage for InMemoryPlanStorage {
    async fn save(&self, plan: &TravelPlan) -> Result<(), PlanStorageError> {
        *self.plan.write().await = Some(plan.clone());
        Ok(())
    }

    async fn load(&self) -> Result<TravelPlan, PlanStorageError> {
        self.plan
            .read()
            .await
            .clone()
            .ok_or(PlanStorageError::NotFound)
    }

    async fn exists(&self) -> Result<bool, PlanStorageError> {
        Ok(self.plan.read().await.is_some())
    }

    async fn delete(&self) -> Result<(), PlanStorageError> {
        *self.plan.write().await = None;
        Ok(())
    }
}
