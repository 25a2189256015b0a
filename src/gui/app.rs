//! Launcher window - egui tabs of launch buttons built from the config

use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::{LauncherConfig, LauncherSettings};
use crate::gui::components;
use crate::gui::constants::*;
use crate::gui::icon::load_icon;
use crate::gui::view::{LauncherView, SelectedTab};
use crate::launcher::Launch;

pub struct LauncherApp {
    view: LauncherView,
    settings: LauncherSettings,
    config_path: PathBuf,
    launcher: Box<dyn Launch>,
    selected: SelectedTab,
    status_message: String,
    /// Last launch failure, shown as a dialog until dismissed
    launch_error: Option<String>,
    /// Set from the signal handler; closes the window on the next frame
    shutdown: Arc<AtomicBool>,
}

impl LauncherApp {
    pub fn new(
        config: LauncherConfig,
        config_path: PathBuf,
        launcher: Box<dyn Launch>,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        let view = LauncherView::build(&config.categories);
        let selected = view.initial_tab();
        let buttons: usize = view.tabs.iter().map(|t| t.buttons.len()).sum();
        info!(tabs = view.tabs.len(), buttons = buttons, "Built launcher view");

        Self {
            view,
            settings: config.settings,
            config_path,
            launcher,
            selected,
            status_message: format!("{buttons} application(s) ready"),
            launch_error: None,
            shutdown,
        }
    }

    /// Launch the `index`-th button of tab `tab`
    pub fn activate(&mut self, tab: usize, index: usize) {
        let Some(button) = self.view.button(tab, index) else {
            warn!(tab = tab, index = index, "Activated a button that does not exist");
            return;
        };
        let request = button.request.clone();

        match self.launcher.launch(&request) {
            Ok(launched) => {
                self.status_message = format!("Started {} (PID: {})", request.name, launched.pid);
            }
            Err(e) => {
                warn!(app = %request.name, error = %e, "Launch failed");
                self.status_message = format!("Failed to start {}", request.name);
                self.launch_error = Some(format!("Failed to start {}:\n{e}", request.name));
            }
        }
    }

    /// Draw one frame
    fn ui(&mut self, ctx: &egui::Context) {
        if self.shutdown.load(Ordering::Relaxed) {
            info!("Shutdown requested, closing launcher window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            if components::tab_bar::ui(ui, &self.view, &mut self.selected) {
                debug!(tab = ?self.selected, "Switched tab");
            }
            ui.add_space(ITEM_SPACING);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(self.status_message.as_str()).small());
        });

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| match self.selected {
            SelectedTab::Category(tab) => {
                if let Some(view) = self.view.tabs.get(tab) {
                    ui.add_space(ITEM_SPACING);
                    clicked = components::launch_buttons::ui(ui, view).map(|index| (tab, index));
                }
            }
            SelectedTab::About => {
                components::about::ui(ui, &self.settings, &self.config_path);
            }
        });

        if let Some((tab, index)) = clicked {
            self.activate(tab, index);
        }

        if let Some(message) = &self.launch_error
            && components::launch_error::show(ctx, message)
        {
            self.launch_error = None;
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);

        // Wake up periodically so a pending SIGINT/SIGTERM is noticed
        ctx.request_repaint_after(Duration::from_millis(SHUTDOWN_POLL_MS));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Launcher window closed");
    }
}

/// Open the launcher window and block until it is closed
pub fn run_gui(
    config: LauncherConfig,
    config_path: PathBuf,
    launcher: Box<dyn Launch>,
    shutdown: Arc<AtomicBool>,
) -> Result<()> {
    let title = config.settings.title.clone();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_title(title.as_str());

    if let Some(icon_path) = &config.settings.icon {
        match load_icon(icon_path) {
            Ok(icon) => viewport = viewport.with_icon(icon),
            Err(e) => warn!(path = %icon_path.display(), error = %e, "Skipping window icon"),
        }
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(LauncherApp::new(config, config_path, launcher, shutdown)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run egui application: {}", e))?;

    Ok(())
}
