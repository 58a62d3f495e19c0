//! CompleteOnboarding - Command handler for finishing the wizard.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::storage_error;
use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::preferences::QuestionnaireDraft;
use crate::domain::recommendation::derive;
use crate::domain::trip_plan::TravelPlan;
use crate::ports::PlanStorage;

/// Command to complete onboarding with the wizard's collected answers.
#[derive(Debug, Clone)]
pub struct CompleteOnboardingCommand {
    pub draft: QuestionnaireDraft,
}

/// Result of successful onboarding completion.
#[derive(Debug, Clone)]
pub struct CompleteOnboardingResult {
    pub plan_id: PlanId,
    pub recommendation_count: usize,
}

/// Handler for completing onboarding.
pub struct CompleteOnboardingHandler {
    storage: Arc<dyn PlanStorage>,
}

impl CompleteOnboardingHandler {
    pub fn new(storage: Arc<dyn PlanStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: CompleteOnboardingCommand,
    ) -> Result<CompleteOnboardingResult, DomainError> {
        // 1. Validate the draft into the immutable questionnaire
        let questionnaire = cmd.draft.build()?;

        // 2. Derive recommendations exactly once
        let recommendations = derive(&questionnaire);
        let recommendation_count = recommendations.total();

        // 3. Merge into the plan record and persist wholesale
        let plan = TravelPlan::new(questionnaire, Some(recommendations));
        self.storage.save(&plan).await.map_err(storage_error)?;

        info!(
            plan_id = %plan.id,
            destination = %plan.questionnaire.destination,
            recommendation_count,
            "onboarding completed"
        );

        Ok(CompleteOnboardingResult {
            plan_id: plan.id,
            recommendation_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPlanStorage;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::preferences::{
        reason, Interest, TravelCompany, TravelStyle, Vibe,
    };
    use crate::ports::PlanStorageError;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct FailingStorage;

    #[async_trait]
    impl PlanStorage for FailingStorage {
        async fn save(&self, _plan: &TravelPlan) -> Result<(), PlanStorageError> {
            Err(PlanStorageError::IoError("disk full".to_string()))
        }

        async fn load(&self) -> Result<TravelPlan, PlanStorageError> {
            Err(PlanStorageError::NotFound)
        }

        async fn exists(&self) -> Result<bool, PlanStorageError> {
            Ok(false)
        }

        async fn delete(&self) -> Result<(), PlanStorageError> {
            Ok(())
        }
    }

    fn complete_draft() -> QuestionnaireDraft {
        QuestionnaireDraft::new()
            .with_username("mira")
            .with_destination("Lisbon")
            .with_dates(
                NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
            )
            .with_reason(reason::REMOTE)
            .with_vibe(Vibe::Creative)
            .with_interest(Interest::Cafes)
            .with_travel_company(TravelCompany::Solo)
            .with_travel_style(TravelStyle::Flow)
    }

    #[tokio::test]
    async fn completes_onboarding_and_persists_the_plan() {
        let storage = Arc::new(InMemoryPlanStorage::new());
        let handler = CompleteOnboardingHandler::new(storage.clone());

        let result = handler
            .handle(CompleteOnboardingCommand {
                draft: complete_draft(),
            })
            .await
            .unwrap();

        let saved = storage.load().await.unwrap();
        assert_eq!(saved.id, result.plan_id);
        assert!(saved.has_recommendations());
        assert_eq!(
            saved.recommendations.as_ref().unwrap().total(),
            result.recommendation_count
        );
    }

    #[tokio::test]
    async fn merged_recommendations_match_a_direct_derivation() {
        let storage = Arc::new(InMemoryPlanStorage::new());
        let handler = CompleteOnboardingHandler::new(storage.clone());

        handler
            .handle(CompleteOnboardingCommand {
                draft: complete_draft(),
            })
            .await
            .unwrap();

        let saved = storage.load().await.unwrap();
        let expected = derive(&saved.questionnaire);
        assert_eq!(saved.recommendations, Some(expected));
    }

    #[tokio::test]
    async fn incomplete_draft_is_rejected_before_derivation() {
        let storage = Arc::new(InMemoryPlanStorage::new());
        let handler = CompleteOnboardingHandler::new(storage.clone());

        let mut draft = complete_draft();
        draft.destination = None;

        let err = handler
            .handle(CompleteOnboardingCommand { draft })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(!storage.exists().await.unwrap());
    }

    #[tokio::test]
    async fn reversed_dates_are_rejected() {
        let storage = Arc::new(InMemoryPlanStorage::new());
        let handler = CompleteOnboardingHandler::new(storage);

        let draft = complete_draft().with_dates(
            NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        );

        let err = handler
            .handle(CompleteOnboardingCommand { draft })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidDateRange);
    }

    #[tokio::test]
    async fn completing_again_replaces_the_previous_plan() {
        let storage = Arc::new(InMemoryPlanStorage::new());
        let handler = CompleteOnboardingHandler::new(storage.clone());

        let first = handler
            .handle(CompleteOnboardingCommand {
                draft: complete_draft(),
            })
            .await
            .unwrap();
        let second = handler
            .handle(CompleteOnboardingCommand {
                draft: complete_draft().with_destination("Porto"),
            })
            .await
            .unwrap();

        let saved = storage.load().await.unwrap();
        assert_eq!(saved.id, second.plan_id);
        assert_ne!(saved.id, first.plan_id);
        assert_eq!(saved.questionnaire.destination, "Porto");
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_domain_error() {
        let handler = CompleteOnboardingHandler::new(Arc::new(FailingStorage));

        let err = handler
            .handle(CompleteOnboardingCommand {
                draft: complete_draft(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
