//! File-based Plan Storage Adapter
//!
//! Stores the travel plan as a single pretty-printed JSON file under a
//! configured data directory, overwritten wholesale on every save.

use std::path::{Path, PathBuf};
use tokio::fs;

use async_trait::async_trait;

use crate::domain::trip_plan::TravelPlan;
use crate::ports::{PlanStorage, PlanStorageError};

/// Well-known file name for the single plan record.
const PLAN_FILE: &str = "travel_plan.json";

/// File-based storage for the travel plan record
#[derive(Debug, Clone)]
pub struct FilePlanStorage {
    base_path: PathBuf,
}

impl FilePlanStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FilePlanStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn plan_file_path(&self) -> PathBuf {
        self.base_path.join(PLAN_FILE)
    }

    async fn ensure_dir(&self) -> Result<(), PlanStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| PlanStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl PlanStorage for FilePlanStorage {
    async fn save(&self, plan: &TravelPlan) -> Result<(), PlanStorageError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string_pretty(plan)
            .map_err(|e| PlanStorageError::SerializationFailed(e.to_string()))?;

        fs::write(self.plan_file_path(), json)
            .await
            .map_err(|e| PlanStorageError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self) -> Result<TravelPlan, PlanStorageError> {
        let file_path = self.plan_file_path();

        if !file_path.exists() {
            return Err(PlanStorageError::NotFound);
        }

        let json = fs::read_to_string(&file_path)
            .await
            .map_err(|e| PlanStorageError::IoError(e.to_string()))?;

        let plan = serde_json::from_str(&json)
            .map_err(|e| PlanStorageError::DeserializationFailed(e.to_string()))?;

        Ok(plan)
    }

    async fn exists(&self) -> Result<bool, PlanStorageError> {
        Ok(self.plan_file_path().exists())
    }

    async fn delete(&self) -> Result<(), PlanStorageError> {
        let file_path = self.plan_file_path();

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| PlanStorageError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}
