//! Trip plan module - the persisted plan record and derived schedule.

pub mod daily_flow;
pub mod plan;

pub use daily_flow::{suggested_daily_flow, DayPlan};
pub use plan::TravelPlan;
