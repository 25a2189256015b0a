//! Launcher-wide settings from the extended config layout

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Launcher";
pub const DEFAULT_TERMINAL: &str = "x-terminal-emulator";
pub const DEFAULT_ABOUT: &str =
    "Tab Launcher\n\nStarts the applications listed in its JSON configuration file.";

/// Window and launch settings shared by all categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    pub title: String,
    pub about: String,
    /// PNG used as the window icon
    pub icon: Option<PathBuf>,
    /// Terminal emulator used for `terminal` entries
    pub terminal: String,
    /// Project page linked from the About tab
    pub homepage: Option<String>,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            about: DEFAULT_ABOUT.to_string(),
            icon: None,
            terminal: DEFAULT_TERMINAL.to_string(),
            homepage: None,
        }
    }
}

/// Top-level keys as they appear in the file, all optional
#[derive(Debug, Default, Deserialize)]
pub(super) struct RawSettings {
    title: Option<String>,
    about: Option<String>,
    icon: Option<PathBuf>,
    terminal: Option<String>,
    homepage: Option<String>,
}

impl RawSettings {
    /// Fill in defaults; a relative icon path is taken relative to `base_dir`
    pub(super) fn resolve(self, base_dir: Option<&Path>) -> LauncherSettings {
        let defaults = LauncherSettings::default();
        let icon = self.icon.map(|icon| match base_dir {
            Some(dir) if icon.is_relative() => dir.join(icon),
            _ => icon,
        });

        LauncherSettings {
            title: non_blank(self.title).unwrap_or(defaults.title),
            about: non_blank(self.about).unwrap_or(defaults.about),
            icon,
            terminal: non_blank(self.terminal).unwrap_or(defaults.terminal),
            homepage: non_blank(self.homepage).map(|url| url.trim().to_string()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
