//! Closed vocabularies for travel mood, activity, company, and style.

use serde::{Deserialize, Serialize};

/// Travel mood tag selected on the vibe screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vibe {
    Calm,
    Energetic,
    Luxury,
    Raw,
    Creative,
}

impl Vibe {
    pub const ALL: [Vibe; 5] = [
        Vibe::Calm,
        Vibe::Energetic,
        Vibe::Luxury,
        Vibe::Raw,
        Vibe::Creative,
    ];

    /// Human-readable label shown in the wizard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Calm => "Calm & peaceful",
            Self::Energetic => "Energetic & social",
            Self::Luxury => "Luxury & comfort",
            Self::Raw => "Raw & local",
            Self::Creative => "Creative & inspiring",
        }
    }
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Activity preference tag selected on the interest screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Cafes,
    Cuisine,
    Nature,
    Startup,
    Museums,
    Photography,
    Nightlife,
    Shopping,
    Wellness,
    Minimal,
}

impl Interest {
    pub const ALL: [Interest; 10] = [
        Interest::Cafes,
        Interest::Cuisine,
        Interest::Nature,
        Interest::Startup,
        Interest::Museums,
        Interest::Photography,
        Interest::Nightlife,
        Interest::Shopping,
        Interest::Wellness,
        Interest::Minimal,
    ];

    /// Human-readable label shown in the wizard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cafes => "Cafés & Co-working",
            Self::Cuisine => "Local Cuisine",
            Self::Nature => "Nature Spots",
            Self::Startup => "Startup Events",
            Self::Museums => "Museums & Art",
            Self::Photography => "Photography",
            Self::Nightlife => "Nightlife",
            Self::Shopping => "Shopping",
            Self::Wellness => "Fitness / Wellness",
            Self::Minimal => "Minimal Planning",
        }
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Who the user is traveling with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelCompany {
    Solo,
    Partner,
    Friends,
    Family,
    Business,
}

impl TravelCompany {
    pub const ALL: [TravelCompany; 5] = [
        TravelCompany::Solo,
        TravelCompany::Partner,
        TravelCompany::Friends,
        TravelCompany::Family,
        TravelCompany::Business,
    ];

    /// Human-readable label shown in the wizard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Partner => "Partner",
            Self::Friends => "Friends",
            Self::Family => "Family",
            Self::Business => "Team/Business Group",
        }
    }
}

impl std::fmt::Display for TravelCompany {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How structured the user wants the trip to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    Planner,
    Flow,
    Balanced,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 3] = [
        TravelStyle::Planner,
        TravelStyle::Flow,
        TravelStyle::Balanced,
    ];

    /// Human-readable label shown in the wizard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planner => "Planner",
            Self::Flow => "Go with the flow",
            Self::Balanced => "Balanced",
        }
    }

    /// Headline shown on the dashboard trip overview.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Planner => "Planned Adventure",
            Self::Flow => "Go with the Flow",
            Self::Balanced => "Balanced Approach",
        }
    }
}

impl std::fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Predefined travel-reason ids offered by the wizard.
///
/// Reasons remain an open string set; the wizard also accepts free text.
pub mod reason {
    pub const RELAX: &str = "relax";
    pub const CULTURE: &str = "culture";
    pub const NETWORK: &str = "network";
    pub const CONTENT: &str = "content";
    pub const REMOTE: &str = "remote";
    pub const REDISCOVER: &str = "rediscover";
}
