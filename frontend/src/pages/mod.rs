pub mod center_detail_page;
pub mod gyms_page;
pub mod home_page;
pub mod plan_detail_page;
pub mod training_plans_page;
