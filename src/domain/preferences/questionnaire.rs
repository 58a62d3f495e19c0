//! The completed travel questionnaire and the wizard's in-progress draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::trip_dates::TripDates;
use super::vocabulary::{Interest, TravelCompany, TravelStyle, Vibe};

/// Complete set of answers collected before recommendation derivation.
///
/// Immutable once constructed; the validating constructor is the only way
/// to obtain one, so the recommendation engine never sees malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub username: String,
    pub destination: String,
    #[serde(flatten)]
    pub dates: TripDates,
    pub travel_reasons: Vec<String>,
    pub vibes: Vec<Vibe>,
    pub interests: Vec<Interest>,
    pub travel_with: TravelCompany,
    pub travel_style: TravelStyle,
}

impl Questionnaire {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        username: String,
        destination: String,
        dates: TripDates,
        travel_reasons: Vec<String>,
        vibes: Vec<Vibe>,
        interests: Vec<Interest>,
        travel_with: TravelCompany,
        travel_style: TravelStyle,
    ) -> Result<Self, ValidationError> {
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if destination.trim().is_empty() {
            return Err(ValidationError::empty_field("destination"));
        }
        if travel_reasons.is_empty() {
            return Err(ValidationError::empty_selection("travel_reasons"));
        }
        if vibes.is_empty() {
            return Err(ValidationError::empty_selection("vibes"));
        }
        if interests.is_empty() {
            return Err(ValidationError::empty_selection("interests"));
        }

        Ok(Self {
            username,
            destination,
            dates,
            travel_reasons,
            vibes,
            interests,
            travel_with,
            travel_style,
        })
    }

    pub fn has_vibe(&self, vibe: Vibe) -> bool {
        self.vibes.contains(&vibe)
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    pub fn has_reason(&self, reason_id: &str) -> bool {
        self.travel_reasons.iter().any(|r| r == reason_id)
    }

    pub fn travels_with(&self, company: TravelCompany) -> bool {
        self.travel_with == company
    }
}

/// In-progress questionnaire the external wizard fills one screen at a time.
///
/// Every field is optional or empty until set; [`QuestionnaireDraft::build`]
/// validates the whole record and produces the immutable [`Questionnaire`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionnaireDraft {
    pub username: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travel_reasons: Vec<String>,
    pub vibes: Vec<Vibe>,
    pub interests: Vec<Interest>,
    pub travel_with: Option<TravelCompany>,
    pub travel_style: Option<TravelStyle>,
}

impl QuestionnaireDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    /// Adds a travel reason unless it is already selected, matching the
    /// wizard's toggle semantics.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if !self.travel_reasons.contains(&reason) {
            self.travel_reasons.push(reason);
        }
        self
    }

    pub fn with_vibe(mut self, vibe: Vibe) -> Self {
        if !self.vibes.contains(&vibe) {
            self.vibes.push(vibe);
        }
        self
    }

    pub fn with_interest(mut self, interest: Interest) -> Self {
        if !self.interests.contains(&interest) {
            self.interests.push(interest);
        }
        self
    }

    pub fn with_travel_company(mut self, company: TravelCompany) -> Self {
        self.travel_with = Some(company);
        self
    }

    pub fn with_travel_style(mut self, style: TravelStyle) -> Self {
        self.travel_style = Some(style);
        self
    }

    /// Validates the draft and produces the immutable questionnaire.
    ///
    /// Missing scalar fields surface as field-labelled errors before the
    /// recommendation engine ever runs.
    pub fn build(&self) -> Result<Questionnaire, ValidationError> {
        let username = self
            .username
            .clone()
            .ok_or_else(|| ValidationError::empty_field("username"))?;
        let destination = self
            .destination
            .clone()
            .ok_or_else(|| ValidationError::empty_field("destination"))?;
        let start_date = self
            .start_date
            .ok_or_else(|| ValidationError::empty_field("start_date"))?;
        let end_date = self
            .end_date
            .ok_or_else(|| ValidationError::empty_field("end_date"))?;
        let travel_with = self
            .travel_with
            .ok_or_else(|| ValidationError::empty_field("travel_with"))?;
        let travel_style = self
            .travel_style
            .ok_or_else(|| ValidationError::empty_field("travel_style"))?;

        let dates = TripDates::new(start_date, end_date)?;

        Questionnaire::new(
            username,
            destination,
            dates,
            self.travel_reasons.clone(),
            self.vibes.clone(),
            self.interests.clone(),
            travel_with,
            travel_style,
        )
    }
}
