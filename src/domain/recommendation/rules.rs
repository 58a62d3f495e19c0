//! The recommendation rule tables.
//!
//! Each category owns a fixed, ordered list of independent rules. A rule
//! is a predicate over the questionnaire plus the literal strings it
//! appends when the predicate holds. Declaration order is output order.

use crate::domain::preferences::{reason, Interest, Questionnaire, TravelCompany, TravelStyle, Vibe};

/// A single condition-to-contribution mapping within one category's list.
pub(super) struct Rule {
    pub when: fn(&Questionnaire) -> bool,
    pub contributes: &'static [&'static str],
}

pub(super) static STAY_TYPES: &[Rule] = &[
    Rule {
        when: |q| q.has_vibe(Vibe::Luxury),
        contributes: &["Luxury Hotels", "High-end Resorts"],
    },
    Rule {
        when: |q| q.has_vibe(Vibe::Raw) || q.has_vibe(Vibe::Creative),
        contributes: &["Boutique Airbnb", "Local Guesthouses"],
    },
    Rule {
        when: |q| q.travels_with(TravelCompany::Friends) || q.has_vibe(Vibe::Energetic),
        contributes: &["Social Hostels", "Party Hotels"],
    },
    Rule {
        when: |q| q.has_interest(Interest::Wellness) || q.has_vibe(Vibe::Calm),
        contributes: &["Wellness Retreats", "Spa Hotels"],
    },
];

// The planner/flow pair is naturally exclusive: travel_style is a single
// value, so at most one of the two equality predicates can hold.
pub(super) static DAILY_ITINERARIES: &[Rule] = &[
    Rule {
        when: |q| q.has_interest(Interest::Nature),
        contributes: &["Morning hikes & nature walks", "Sunset viewpoint visits"],
    },
    Rule {
        when: |q| q.has_interest(Interest::Museums),
        contributes: &["Cultural museum tours", "Art gallery explorations"],
    },
    Rule {
        when: |q| q.has_interest(Interest::Cuisine),
        contributes: &["Food market tours", "Cooking class experiences"],
    },
    Rule {
        when: |q| q.travel_style == TravelStyle::Planner,
        contributes: &["Structured city tours", "Pre-booked activities"],
    },
    Rule {
        when: |q| q.travel_style == TravelStyle::Flow,
        contributes: &["Spontaneous neighborhood walks", "Local discovery time"],
    },
];

pub(super) static CAFES_COWORKING: &[Rule] = &[
    Rule {
        when: |q| q.has_interest(Interest::Cafes),
        contributes: &[
            "Specialty coffee shops",
            "Local roasteries",
            "Digital nomad cafés",
        ],
    },
    Rule {
        when: |q| q.has_reason(reason::REMOTE),
        contributes: &["Coworking spaces", "WiFi-friendly cafés", "Business centers"],
    },
    Rule {
        when: |q| q.has_vibe(Vibe::Creative),
        contributes: &["Artist cafés", "Creative coworking hubs"],
    },
];

pub(super) static EVENTS: &[Rule] = &[
    Rule {
        when: |q| q.has_vibe(Vibe::Energetic),
        contributes: &["Live music venues", "Festival events", "Nightlife hotspots"],
    },
    Rule {
        when: |q| q.has_interest(Interest::Startup),
        contributes: &["Startup meetups", "Tech conferences", "Networking events"],
    },
    Rule {
        when: |q| q.has_vibe(Vibe::Creative),
        contributes: &["Art exhibitions", "Creative workshops", "Design talks"],
    },
];

pub(super) static FOOD_JOINTS: &[Rule] = &[
    Rule {
        when: |q| q.has_interest(Interest::Cuisine),
        contributes: &["Local street food", "Traditional restaurants", "Food markets"],
    },
    Rule {
        when: |q| q.has_vibe(Vibe::Luxury),
        contributes: &["Fine dining restaurants", "Michelin-starred venues"],
    },
    Rule {
        when: |q| q.has_vibe(Vibe::Raw),
        contributes: &[
            "Hidden local gems",
            "Family-run eateries",
            "Authentic hole-in-the-wall spots",
        ],
    },
];

pub(super) static PHOTO_LOCATIONS: &[Rule] = &[
    Rule {
        when: |q| q.has_interest(Interest::Photography),
        contributes: &[
            "Scenic viewpoints",
            "Architectural landmarks",
            "Golden hour spots",
        ],
    },
    Rule {
        when: |q| q.has_vibe(Vibe::Creative),
        contributes: &["Street art walls", "Creative districts", "Design landmarks"],
    },
    Rule {
        when: |q| q.has_interest(Interest::Nature),
        contributes: &["Natural landscapes", "Botanical gardens", "Waterfront areas"],
    },
];
