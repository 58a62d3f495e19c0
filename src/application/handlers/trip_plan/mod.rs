//! Trip plan handlers.

mod get_trip_plan;

pub use get_trip_plan::GetTripPlanHandler;
