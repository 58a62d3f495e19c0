//! Pure derivation of recommendations from a completed questionnaire.

use crate::domain::preferences::Questionnaire;

use super::rules::{
    Rule, CAFES_COWORKING, DAILY_ITINERARIES, EVENTS, FOOD_JOINTS, PHOTO_LOCATIONS, STAY_TYPES,
};
use super::set::RecommendationSet;

/// Derives the six recommendation categories from a questionnaire.
///
/// Total and deterministic: identical input always yields identical
/// output, including ordering. Empty collections simply contribute no
/// matches. All rules for a category are checked; contributions
/// concatenate in rule-declaration order.
pub fn derive(questionnaire: &Questionnaire) -> RecommendationSet {
    RecommendationSet {
        stay_types: collect(STAY_TYPES, questionnaire),
        daily_itineraries: collect(DAILY_ITINERARIES, questionnaire),
        cafes_coworking: collect(CAFES_COWORKING, questionnaire),
        events: collect(EVENTS, questionnaire),
        food_joints: collect(FOOD_JOINTS, questionnaire),
        photo_locations: collect(PHOTO_LOCATIONS, questionnaire),
    }
}

fn collect(rules: &[Rule], questionnaire: &Questionnaire) -> Vec<String> {
    let mut out = Vec::new();
    for rule in rules {
        if (rule.when)(questionnaire) {
            out.extend(rule.contributes.iter().map(|s| s.to_string()));
        }
    }
    out
}
