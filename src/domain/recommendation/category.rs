//! Recommendation category identifiers.

use serde::{Deserialize, Serialize};

/// The six output categories of the recommendation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    StayTypes,
    DailyItineraries,
    CafesCoworking,
    Events,
    FoodJoints,
    PhotoLocations,
}

impl RecommendationCategory {
    /// Categories in display order.
    pub const ALL: [RecommendationCategory; 6] = [
        RecommendationCategory::StayTypes,
        RecommendationCategory::DailyItineraries,
        RecommendationCategory::CafesCoworking,
        RecommendationCategory::Events,
        RecommendationCategory::FoodJoints,
        RecommendationCategory::PhotoLocations,
    ];

    /// Section title shown on the processing and trip-plan screens.
    pub fn title(&self) -> &'static str {
        match self {
            Self::StayTypes => "Stay recommendations",
            Self::DailyItineraries => "Daily itineraries",
            Self::CafesCoworking => "Cafés & coworking",
            Self::Events => "Local events",
            Self::FoodJoints => "Food recommendations",
            Self::PhotoLocations => "Photo spots",
        }
    }
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
