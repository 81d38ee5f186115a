pub mod gyms;
pub mod plans;
