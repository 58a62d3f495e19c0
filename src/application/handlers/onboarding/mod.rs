//! Onboarding handlers.

mod complete_onboarding;
mod restart_onboarding;

pub use complete_onboarding::{
    CompleteOnboardingCommand, CompleteOnboardingHandler, CompleteOnboardingResult,
};
pub use restart_onboarding::RestartOnboardingHandler;
