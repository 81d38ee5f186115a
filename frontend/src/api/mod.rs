pub mod gyms_api;
pub mod plans_api;
