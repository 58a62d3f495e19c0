//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports: validating the wizard's draft, invoking the recommendation
//! engine exactly once, and persisting the resulting plan record.

pub mod handlers;

pub use handlers::{
    CompleteOnboardingCommand, CompleteOnboardingHandler, CompleteOnboardingResult,
    GetTripPlanHandler, RestartOnboardingHandler,
};
