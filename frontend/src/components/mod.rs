pub mod directory_components;
pub mod error_boundary;
pub mod navbar;
pub mod not_found;
pub mod suspend_boundary;
