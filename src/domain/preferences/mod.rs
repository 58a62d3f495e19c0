//! Preferences module - the travel questionnaire and its vocabularies.
//!
//! The external wizard collects one field at a time into a
//! [`QuestionnaireDraft`]; [`QuestionnaireDraft::build`] is the validation
//! gate that produces the immutable [`Questionnaire`] the recommendation
//! engine consumes. Vibes, interests, travel company, and travel style are
//! closed vocabularies; travel reasons stay an open string list because the
//! wizard accepts free-text entries.

pub mod questionnaire;
pub mod trip_dates;
pub mod vocabulary;

pub use questionnaire::{Questionnaire, QuestionnaireDraft};
pub use trip_dates::TripDates;
pub use vocabulary::{reason, Interest, TravelCompany, TravelStyle, Vibe};
