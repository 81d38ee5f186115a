pub mod debounce;
pub mod search_controller;
