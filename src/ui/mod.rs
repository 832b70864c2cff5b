pub mod actions;
pub mod app;
pub mod data_table;
pub mod edit_modal;
