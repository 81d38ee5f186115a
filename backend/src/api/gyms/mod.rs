//! Gym directory endpoints and module exports.

mod search_gyms;
pub use search_gyms::search_gyms;

mod featured_gyms;
pub use featured_gyms::featured_gyms;

mod list_gyms;
pub use list_gyms::list_gyms;

mod get_gym;
pub use get_gym::get_gym_by_slug;
