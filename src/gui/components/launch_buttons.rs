//! Launch buttons of a single category tab

use eframe::egui;
use crate::gui::constants::*;
use crate::gui::view::TabView;

/// Renders one button per enabled entry and returns the index of the clicked one
pub fn ui(ui: &mut egui::Ui, tab: &TabView) -> Option<usize> {
    if tab.buttons.is_empty() {
        ui.label(egui::RichText::new("No enabled applications in this category")
            .italics()
            .weak());
        return None;
    }

    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, button) in tab.buttons.iter().enumerate() {
                let width = ui.available_width();
                let response = ui
                    .add_sized([width, BUTTON_HEIGHT], egui::Button::new(button.label.as_str()))
                    .on_hover_text(button.request.command.to_string());

                if response.clicked() {
                    clicked = Some(index);
                }

                ui.add_space(ITEM_SPACING / 2.0);
            }
        });

    clicked
}
