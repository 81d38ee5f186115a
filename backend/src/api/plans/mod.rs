//! Training-plan endpoints and module exports.

mod list_plans;
pub use list_plans::list_plans;

mod get_plan;
pub use get_plan::get_plan_by_slug;
