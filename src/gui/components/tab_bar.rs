//! Tab strip: one tab per category plus the trailing About tab

use eframe::egui;
use crate::gui::view::{LauncherView, SelectedTab};

/// Renders the tab strip and returns true if the selection changed
pub fn ui(ui: &mut egui::Ui, view: &LauncherView, selected: &mut SelectedTab) -> bool {
    let mut changed = false;

    ui.horizontal_wrapped(|ui| {
        for (index, tab) in view.tabs.iter().enumerate() {
            if ui.selectable_value(selected, SelectedTab::Category(index), tab.title.as_str()).changed() {
                changed = true;
            }
        }

        if !view.tabs.is_empty() {
            ui.separator();
        }

        if ui.selectable_value(selected, SelectedTab::About, "About").changed() {
            changed = true;
        }
    });

    changed
}
