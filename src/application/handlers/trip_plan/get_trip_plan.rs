//! GetTripPlan - Query handler for the dashboard and trip-plan screens.

use std::sync::Arc;

use crate::application::handlers::storage_error;
use crate::domain::foundation::DomainError;
use crate::domain::trip_plan::TravelPlan;
use crate::ports::PlanStorage;

/// Handler for loading the persisted travel plan.
///
/// A `PLAN_NOT_FOUND` error is the signal the screens use to redirect
/// back into onboarding.
pub struct GetTripPlanHandler {
    storage: Arc<dyn PlanStorage>,
}

impl GetTripPlanHandler {
    pub fn new(storage: Arc<dyn PlanStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self) -> Result<TravelPlan, DomainError> {
        self.storage.load().await.map_err(storage_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPlanStorage;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::preferences::{
        reason, Interest, QuestionnaireDraft, TravelCompany, TravelStyle, Vibe,
    };
    use crate::domain::recommendation::derive;
    use chrono::NaiveDate;

    fn test_plan() -> TravelPlan {
        let q = QuestionnaireDraft::new()
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
            .build()
            .unwrap();
        let recommendations = derive(&q);
        TravelPlan::new(q, Some(recommendations))
    }

    #[tokio::test]
    async fn returns_the_saved_plan() {
        let storage = Arc::new(InMemoryPlanStorage::new());
        let plan = test_plan();
        storage.save(&plan).await.unwrap();

        let handler = GetTripPlanHandler::new(storage);
        let loaded = handler.handle().await.unwrap();

        assert_eq!(loaded, plan);
    }

    #[tokio::test]
    async fn missing_plan_surfaces_plan_not_found() {
        let storage = Arc::new(InMemoryPlanStorage::new());
        let handler = GetTripPlanHandler::new(storage);

        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotFound);
    }
}
