//! Storage adapters for the travel plan record.

mod file_plan_storage;
mod in_memory_plan_storage;

pub use file_plan_storage::FilePlanStorage;
pub use in_memory_plan_storage::InMemoryPlanStorage;
