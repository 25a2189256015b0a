//! Layout constants for the launcher window

pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 480.0;

pub const SECTION_SPACING: f32 = 12.0;
pub const ITEM_SPACING: f32 = 6.0;

pub const BUTTON_HEIGHT: f32 = 32.0;
pub const ABOUT_WRAP_WIDTH: f32 = 380.0;

/// How often the UI wakes up to check for SIGINT/SIGTERM
pub const SHUTDOWN_POLL_MS: u64 = 500;
