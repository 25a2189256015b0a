//! Reusable UI pieces rendered by the launcher window

pub mod about;
pub mod launch_buttons;
pub mod launch_error;
pub mod tab_bar;
