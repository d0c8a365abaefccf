//! Reusable stateless controls.

pub mod edit_button;

pub use edit_button::{ButtonType, ClickEvent, EditButton, EditButtonView};
