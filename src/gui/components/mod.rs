// src/gui/components/mod.rs
pub mod action_buttons;
pub mod results;
pub mod search_form;
