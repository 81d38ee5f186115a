//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod gym;
pub mod training_plan;
pub mod facet_filter;
pub mod search_const;
