//! The persisted travel plan record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlanId;
use crate::domain::preferences::Questionnaire;
use crate::domain::recommendation::RecommendationSet;

use super::daily_flow::{suggested_daily_flow, DayPlan};

/// The single record persisted after onboarding completes.
///
/// Contains every questionnaire field plus the optional derived
/// recommendations. Never mutated after creation; a new onboarding run
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub id: PlanId,
    #[serde(flatten)]
    pub questionnaire: Questionnaire,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<RecommendationSet>,
    pub completed_at: DateTime<Utc>,
}

impl TravelPlan {
    /// Creates a plan record, stamping a fresh id and completion time.
    pub fn new(questionnaire: Questionnaire, recommendations: Option<RecommendationSet>) -> Self {
        Self {
            id: PlanId::new(),
            questionnaire,
            recommendations,
            completed_at: Utc::now(),
        }
    }

    pub fn has_recommendations(&self) -> bool {
        self.recommendations.is_some()
    }

    /// Trip length label shown on the dashboard ("1 day", "5 days").
    pub fn duration_label(&self) -> String {
        self.questionnaire.dates.duration_label()
    }

    /// Suggested day-by-day schedule for the trip-plan screen.
    pub fn daily_flow(&self) -> Vec<DayPlan> {
        suggested_daily_flow(self.questionnaire.dates.duration_days().max(1))
    }
}
