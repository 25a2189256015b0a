//! Widget model built from the parsed categories
//!
//! The egui layer only renders this model; all decisions about which
//! controls exist (and what each one launches) are made here.

use crate::types::{Category, LaunchRequest};

/// One clickable control, owning a copy of its entry's request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchButton {
    pub label: String,
    pub request: LaunchRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub title: String,
    pub buttons: Vec<LaunchButton>,
}

/// Which tab is showing; About always sits after the categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedTab {
    Category(usize),
    About,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherView {
    pub tabs: Vec<TabView>,
}

impl LauncherView {
    pub fn build(categories: &[Category]) -> Self {
        let tabs = categories
            .iter()
            .map(|category| TabView {
                title: category.name.clone(),
                buttons: category
                    .enabled_entries()
                    .map(|entry| LaunchButton {
                        label: entry.name.clone(),
                        request: entry.launch_request(),
                    })
                    .collect(),
            })
            .collect();

        Self { tabs }
    }

    /// First category, or About when the config has none
    pub fn initial_tab(&self) -> SelectedTab {
        if self.tabs.is_empty() {
            SelectedTab::About
        } else {
            SelectedTab::Category(0)
        }
    }

    pub fn button(&self, tab: usize, index: usize) -> Option<&LaunchButton> {
        self.tabs.get(tab)?.buttons.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;

    fn view(json: &str) -> LauncherView {
        let config = LauncherConfig::parse(json, None).unwrap();
        LauncherView::build(&config.categories)
    }

    #[test]
    fn test_example_config_single_button() {
        let view = view(
            r#"{"Utilities": [
                {"name": "Calc", "command": "calc", "enabled": true},
                {"name": "Old", "command": "old", "enabled": false}
            ]}"#,
        );
        assert_eq!(view.tabs.len(), 1);
        assert_eq!(view.tabs[0].title, "Utilities");
        assert_eq!(view.tabs[0].buttons.len(), 1);
        assert_eq!(view.tabs[0].buttons[0].label, "Calc");
        assert_eq!(view.tabs[0].buttons[0].request.command.program, "calc");
    }

    #[test]
    fn test_one_tab_per_category_in_order() {
        let view = view(
            r#"{
                "Office": [{"name": "Writer", "command": "lowriter"}],
                "Empty": [],
                "AllDisabled": [{"name": "x", "command": "x", "enabled": false}],
                "Games": [{"name": "Chess", "command": "gnome-chess"}]
            }"#,
        );
        let titles: Vec<_> = view.tabs.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Office", "Empty", "AllDisabled", "Games"]);
        assert!(view.tabs[1].buttons.is_empty());
        assert!(view.tabs[2].buttons.is_empty());
    }

    #[test]
    fn test_each_button_owns_its_command() {
        let view = view(
            r#"{"Dev": [
                {"name": "A", "command": "same --flag a"},
                {"name": "Hidden", "command": "hidden", "enabled": false},
                {"name": "B", "command": ["same", "--flag", "b"], "terminal": true},
                {"name": "C", "command": "c"}
            ]}"#,
        );
        let buttons = &view.tabs[0].buttons;
        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);

        assert_eq!(buttons[0].request.command.argv(), vec!["same", "--flag", "a"]);
        assert_eq!(buttons[1].request.command.argv(), vec!["same", "--flag", "b"]);
        assert!(buttons[1].request.terminal);
        assert_eq!(buttons[2].request.command.argv(), vec!["c"]);
        assert!(buttons.iter().all(|b| b.label == b.request.name));
    }

    #[test]
    fn test_initial_tab_and_lookup() {
        let empty = view("{}");
        assert!(empty.tabs.is_empty());
        assert_eq!(empty.initial_tab(), SelectedTab::About);

        let view = view(r#"{"T": [{"name": "a", "command": "a"}]}"#);
        assert_eq!(view.initial_tab(), SelectedTab::Category(0));
        assert!(view.button(0, 0).is_some());
        assert!(view.button(0, 1).is_none());
        assert!(view.button(1, 0).is_none());
    }
}
