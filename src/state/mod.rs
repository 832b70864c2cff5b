pub mod cell_editor;
pub mod column;
pub mod data_model;
pub mod edit_modal;
pub mod labels;
pub mod notice;
pub mod plans;
pub mod table_state;
