//! RestartOnboarding - Command handler for discarding the saved plan.
//!
//! Backs the "Edit Preferences" flow: the stored record is deleted so the
//! wizard starts over from a clean slate.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::storage_error;
use crate::domain::foundation::DomainError;
use crate::ports::PlanStorage;

/// Handler for restarting onboarding.
pub struct RestartOnboardingHandler {
    storage: Arc<dyn PlanStorage>,
}

impl RestartOnboardingHandler {
    pub fn new(storage: Arc<dyn PlanStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self) -> Result<(), DomainError> {
        self.storage.delete().await.map_err(storage_error)?;
        info!("saved travel plan discarded, onboarding restarted");
        Ok(())
    }
}
