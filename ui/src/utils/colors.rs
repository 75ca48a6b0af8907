//! Shared color constants for the UI.

use egui::Color32;

/// Destructive actions (delete buttons).
pub const COLOR_RED: Color32 = Color32::from_rgb(245, 84, 95);

/// Edit actions.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(22, 119, 255);
