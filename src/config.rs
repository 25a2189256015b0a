//! JSON launcher configuration
//!
//! Two layouts are accepted:
//! - flat: `{"Category": [{"name": ..., "command": ...}, ...], ...}`
//! - extended: `{"title": ..., "about": ..., "icon": ..., "terminal": ...,
//!   "categories": { <flat layout> }}`
//!
//! Category order follows the file (serde_json `preserve_order`). Category
//! maps are read key by key so a repeated category name is reported instead
//! of silently merged.

mod settings;

pub use settings::LauncherSettings;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{AppEntry, Category, LaunchCommand};
use settings::RawSettings;

pub const APP_DIR: &str = "tab-launcher";
pub const FILENAME: &str = "launcher.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} must be a JSON object")]
    NotAnObject(&'static str),

    #[error("category names must not be empty")]
    EmptyCategoryName,

    #[error("category '{category}' is defined more than once")]
    DuplicateCategory { category: String },

    #[error("category '{category}' must be a list of entries")]
    CategoryNotList { category: String },

    #[error("entry #{index} in category '{category}' is invalid: {source}")]
    InvalidEntry {
        category: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry #{index} in category '{category}' is missing required field '{field}'")]
    MissingField {
        category: String,
        index: usize,
        field: &'static str,
    },

    #[error("entry '{entry}' in category '{category}' has an empty or malformed command")]
    EmptyCommand { category: String, entry: String },

    #[error("invalid top-level setting: {0}")]
    InvalidSetting(#[source] serde_json::Error),
}

/// Fully validated launcher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub settings: LauncherSettings,
    pub categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RawEntry {
    name: Option<String>,
    command: Option<RawCommand>,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    terminal: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCommand {
    Line(String),
    Argv(Vec<String>),
}

/// JSON object members in file order, duplicate keys included
struct ObjectEntries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for ObjectEntries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = ObjectEntries<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(ObjectEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl RawCommand {
    /// Parsed command plus the original line for string commands
    fn into_command(self) -> Option<(LaunchCommand, Option<String>)> {
        match self {
            RawCommand::Line(line) => Some((LaunchCommand::parse(&line)?, Some(line))),
            RawCommand::Argv(argv) => Some((LaunchCommand::from_argv(argv)?, None)),
        }
    }
}

impl LauncherConfig {
    /// Default location: `<config dir>/tab-launcher/launcher.json`,
    /// `./launcher.json` when no config dir is known
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(mut path) => {
                path.push(APP_DIR);
                path.push(FILENAME);
                path
            }
            None => PathBuf::from(FILENAME),
        }
    }

    /// Read and validate the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents, path.parent())?;
        info!(
            path = %path.display(),
            categories = config.categories.len(),
            entries = config.categories.iter().map(|c| c.entries.len()).sum::<usize>(),
            "Loaded launcher config"
        );
        Ok(config)
    }

    /// Parse config text; relative icon paths resolve against `base_dir`
    pub fn parse(contents: &str, base_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let root: Value = serde_json::from_str(contents)?;
        let Value::Object(object) = &root else {
            return Err(ConfigError::NotAnObject("config root"));
        };

        // A "categories" array is an ordinary category in the flat layout
        let (settings, categories) = match object.get("categories") {
            Some(Value::Object(_)) => {
                debug!("Using extended config layout");
                let raw = RawSettings::deserialize(&root).map_err(ConfigError::InvalidSetting)?;
                // Last "categories" member wins, same as the parsed object above
                let members: ObjectEntries<Box<RawValue>> = serde_json::from_str(contents)?;
                let categories = members
                    .0
                    .into_iter()
                    .rev()
                    .find(|(key, _)| key == "categories")
                    .map(|(_, value)| value)
                    .ok_or(ConfigError::NotAnObject("'categories'"))?;
                let categories: ObjectEntries<Value> = serde_json::from_str(categories.get())?;
                (raw.resolve(base_dir), parse_categories(categories)?)
            }
            None | Some(Value::Array(_)) => {
                debug!("Using flat config layout");
                let categories: ObjectEntries<Value> = serde_json::from_str(contents)?;
                (LauncherSettings::default(), parse_categories(categories)?)
            }
            Some(_) => return Err(ConfigError::NotAnObject("'categories'")),
        };

        Ok(Self { settings, categories })
    }
}

fn parse_categories(members: ObjectEntries<Value>) -> Result<Vec<Category>, ConfigError> {
    let mut seen = HashSet::new();
    members
        .0
        .iter()
        .map(|(name, entries)| {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateCategory {
                    category: name.clone(),
                });
            }
            parse_category(name, entries)
        })
        .collect()
}

fn parse_category(name: &str, value: &Value) -> Result<Category, ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::EmptyCategoryName);
    }
    let Value::Array(items) = value else {
        return Err(ConfigError::CategoryNotList {
            category: name.to_string(),
        });
    };

    let entries = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_entry(name, index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Category {
        name: name.to_string(),
        entries,
    })
}

fn parse_entry(category: &str, index: usize, value: &Value) -> Result<AppEntry, ConfigError> {
    let raw = RawEntry::deserialize(value).map_err(|source| ConfigError::InvalidEntry {
        category: category.to_string(),
        index,
        source,
    })?;

    let missing = |field| ConfigError::MissingField {
        category: category.to_string(),
        index,
        field,
    };
    let name = raw.name.ok_or_else(|| missing("name"))?;
    let (command, command_line) = raw
        .command
        .ok_or_else(|| missing("command"))?
        .into_command()
        .ok_or_else(|| ConfigError::EmptyCommand {
            category: category.to_string(),
            entry: name.clone(),
        })?;

    Ok(AppEntry {
        name,
        command,
        command_line,
        enabled: raw.enabled,
        terminal: raw.terminal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXAMPLE: &str = r#"{
        "Utilities": [
            {"name": "Calc", "command": "calc", "enabled": true},
            {"name": "Old", "command": "old", "enabled": false}
        ]
    }"#;

    fn parse(contents: &str) -> Result<LauncherConfig, ConfigError> {
        LauncherConfig::parse(contents, None)
    }

    #[test]
    fn test_flat_layout_example() {
        let config = parse(EXAMPLE).unwrap();
        assert_eq!(config.settings, LauncherSettings::default());
        assert_eq!(config.categories.len(), 1);

        let utilities = &config.categories[0];
        assert_eq!(utilities.name, "Utilities");
        assert_eq!(utilities.entries.len(), 2);
        assert!(utilities.entries[0].enabled);
        assert!(!utilities.entries[1].enabled);
        assert_eq!(utilities.entries[0].command.program, "calc");
    }

    #[test]
    fn test_category_order_follows_file() {
        let config = parse(
            r#"{"Zeta": [], "Alpha": [], "Media": [{"name": "vlc", "command": "vlc"}]}"#,
        )
        .unwrap();
        let names: Vec<_> = config.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Media"]);
    }

    #[test]
    fn test_enabled_defaults_to_true_and_unknown_fields_ignored() {
        let config = parse(
            r#"{"Dev": [{"name": "Editor", "command": "code", "icon": "x.png", "extra": {"a": 1}}]}"#,
        )
        .unwrap();
        let entry = &config.categories[0].entries[0];
        assert!(entry.enabled);
        assert!(!entry.terminal);
    }

    #[test]
    fn test_command_list_and_string_forms() {
        let config = parse(
            r#"{"Dev": [
                {"name": "List", "command": ["python3", "tool.py", "--name", "a b"]},
                {"name": "Line", "command": "python3 tool.py --name 'a b'"}
            ]}"#,
        )
        .unwrap();
        let entries = &config.categories[0].entries;
        assert_eq!(entries[0].command, entries[1].command);
        assert_eq!(entries[0].command.args, vec!["tool.py", "--name", "a b"]);
    }

    #[test]
    fn test_missing_command_is_error() {
        let err = parse(r#"{"Dev": [{"name": "Broken"}]}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField { ref category, index: 0, field: "command" } if category == "Dev"
        ));
    }

    #[test]
    fn test_missing_name_is_error() {
        let err = parse(r#"{"Dev": [{"name": "Ok", "command": "ok"}, {"command": "x"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { index: 1, field: "name", .. }));
    }

    #[test]
    fn test_empty_commands_rejected() {
        for command in [r#""""#, "[]", r#""  ""#, r#""echo 'unterminated""#] {
            let json = format!(r#"{{"Dev": [{{"name": "E", "command": {command}}}]}}"#);
            let err = parse(&json).unwrap_err();
            assert!(matches!(err, ConfigError::EmptyCommand { .. }), "command {command}: {err}");
        }
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(matches!(
            parse(r#"{"Dev": [{"name": 5, "command": "x"}]}"#),
            Err(ConfigError::InvalidEntry { .. })
        ));
        assert!(matches!(
            parse(r#"{"Dev": ["just a string"]}"#),
            Err(ConfigError::InvalidEntry { .. })
        ));
        assert!(matches!(
            parse(r#"{"Dev": [{"name": "x", "command": "x", "enabled": "yes"}]}"#),
            Err(ConfigError::InvalidEntry { .. })
        ));
        assert!(matches!(
            parse(r#"{"Dev": {"name": "x"}}"#),
            Err(ConfigError::CategoryNotList { .. })
        ));
        assert!(matches!(parse("[1, 2]"), Err(ConfigError::NotAnObject(_))));
        assert!(matches!(parse(r#"{"": []}"#), Err(ConfigError::EmptyCategoryName)));
    }

    #[test]
    fn test_repeated_category_is_rejected() {
        let err = parse(
            r#"{"Tools": [{"name": "a", "command": "a"}], "Media": [], "Tools": [{"name": "b", "command": "b"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateCategory { ref category } if category == "Tools"));
        assert!(err.to_string().contains("'Tools'"));
    }

    #[test]
    fn test_repeated_category_in_extended_layout_is_rejected() {
        let err = parse(r#"{"title": "T", "categories": {"Apps": [], "Apps": []}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateCategory { ref category } if category == "Apps"));
    }

    #[test]
    fn test_category_names_are_case_sensitive() {
        let config = parse(r#"{"Apps": [], "apps": []}"#).unwrap();
        assert_eq!(config.categories.len(), 2);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse("{not json"), Err(ConfigError::Parse(_))));
        assert!(matches!(parse(""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_extended_layout() {
        let config = parse(
            r#"{
                "title": "My Tools",
                "about": "Internal tools",
                "terminal": "xterm",
                "homepage": "https://tools.example.org/launcher",
                "unused": 42,
                "categories": {
                    "Scripts": [{"name": "Backup", "command": "backup.sh", "terminal": true}],
                    "Apps": []
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.settings.title, "My Tools");
        assert_eq!(config.settings.about, "Internal tools");
        assert_eq!(config.settings.terminal, "xterm");
        assert_eq!(config.settings.homepage.as_deref(), Some("https://tools.example.org/launcher"));
        assert_eq!(config.categories.len(), 2);
        assert!(config.categories[0].entries[0].terminal);
    }

    #[test]
    fn test_extended_layout_bad_setting_type() {
        let err = parse(r#"{"title": 3, "categories": {}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting(_)));
    }

    #[test]
    fn test_categories_key_with_wrong_type() {
        let err = parse(r#"{"categories": "nope"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject(_)));
    }

    #[test]
    fn test_categories_list_is_plain_category() {
        let config = parse(r#"{"categories": [{"name": "a", "command": "a"}]}"#).unwrap();
        assert_eq!(config.categories[0].name, "categories");
        assert_eq!(config.settings, LauncherSettings::default());
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();

        let config = LauncherConfig::load(file.path()).unwrap();
        assert_eq!(config.categories[0].name, "Utilities");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = LauncherConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_resolves_icon_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        fs::write(&path, r#"{"icon": "icon.png", "categories": {}}"#).unwrap();

        let config = LauncherConfig::load(&path).unwrap();
        assert_eq!(config.settings.icon, Some(dir.path().join("icon.png")));
    }

    #[test]
    fn test_default_path_ends_with_app_file() {
        let path = LauncherConfig::default_path();
        assert!(path.ends_with(FILENAME));
    }
}
