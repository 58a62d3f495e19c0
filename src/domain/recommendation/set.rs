//! The six-category output of the recommendation engine.

use serde::{Deserialize, Serialize};

use super::category::RecommendationCategory;

/// Derived recommendations, never mutated after creation.
///
/// Each sequence preserves rule-declaration order, may be empty (no field
/// implied a recommendation), and may contain duplicates. The engine
/// never deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub stay_types: Vec<String>,
    pub daily_itineraries: Vec<String>,
    pub cafes_coworking: Vec<String>,
    pub events: Vec<String>,
    pub food_joints: Vec<String>,
    pub photo_locations: Vec<String>,
}

impl RecommendationSet {
    /// Returns the sequence for a category.
    ///
    /// An empty sequence means "no recommendation available", never an
    /// error.
    pub fn for_category(&self, category: RecommendationCategory) -> &[String] {
        match category {
            RecommendationCategory::StayTypes => &self.stay_types,
            RecommendationCategory::DailyItineraries => &self.daily_itineraries,
            RecommendationCategory::CafesCoworking => &self.cafes_coworking,
            RecommendationCategory::Events => &self.events,
            RecommendationCategory::FoodJoints => &self.food_joints,
            RecommendationCategory::PhotoLocations => &self.photo_locations,
        }
    }

    /// True when no rule fired for any category.
    pub fn is_empty(&self) -> bool {
        RecommendationCategory::ALL
            .iter()
            .all(|c| self.for_category(*c).is_empty())
    }

    /// Total number of recommendation entries across all categories.
    pub fn total(&self) -> usize {
        RecommendationCategory::ALL
            .iter()
            .map(|c| self.for_category(*c).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_empty() {
        let set = RecommendationSet::default();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0);
    }

    #[test]
    fn for_category_returns_matching_sequence() {
        let set = RecommendationSet {
            events: vec!["Live music venues".to_string()],
            ..Default::default()
        };
        assert_eq!(
            set.for_category(RecommendationCategory::Events),
            ["Live music venues".to_string()]
        );
        assert!(set
            .for_category(RecommendationCategory::StayTypes)
            .is_empty());
    }

    #[test]
    fn total_counts_across_categories() {
        let set = RecommendationSet {
            stay_types: vec!["Luxury Hotels".to_string(), "High-end Resorts".to_string()],
            food_joints: vec!["Fine dining restaurants".to_string()],
            ..Default::default()
        };
        assert_eq!(set.total(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn serializes_with_category_field_names() {
        let set = RecommendationSet {
            cafes_coworking: vec!["Coworking spaces".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["cafes_coworking"][0], "Coworking spaces");
        assert_eq!(json["photo_locations"].as_array().unwrap().len(), 0);
    }
}
