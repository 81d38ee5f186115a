pub mod facet_menu;
pub mod gym_result_card;
pub mod plan_result_card;
pub mod search_bar;
