//! Modal-style dialog for a failed launch

use eframe::egui;
use crate::gui::constants::*;

/// Shows the failure message; returns true once the user dismissed it
pub fn show(ctx: &egui::Context, message: &str) -> bool {
    let mut dismissed = false;

    egui::Window::new("Launch failed")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(ITEM_SPACING);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    dismissed
}
