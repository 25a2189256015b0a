//! About tab: configured text plus build and config details

use eframe::egui;
use std::path::Path;
use crate::config::LauncherSettings;
use crate::gui::constants::*;

pub fn ui(ui: &mut egui::Ui, settings: &LauncherSettings, config_path: &Path) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(ABOUT_WRAP_WIDTH);
        ui.add_space(SECTION_SPACING);

        ui.label(settings.about.as_str());

        ui.add_space(SECTION_SPACING);
        ui.separator();
        ui.add_space(ITEM_SPACING);

        let version = egui::RichText::new(
            format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
            .small();
        match &settings.homepage {
            Some(url) => {
                ui.hyperlink_to(version, url).on_hover_text(url.as_str());
            }
            None => {
                ui.label(version.weak());
            }
        }
        ui.label(egui::RichText::new(
            format!("Config file: {}", config_path.display()))
            .small()
            .weak());
    });
}
