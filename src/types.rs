//! Domain types for type safety and clarity

use std::fmt;

/// A parsed command line: program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Build from an argument vector, first element is the program
    /// Returns None for an empty vector or an empty program name
    pub fn from_argv(argv: Vec<String>) -> Option<Self> {
        let mut iter = argv.into_iter();
        let program = iter.next().filter(|p| !p.trim().is_empty())?;
        Some(Self {
            program,
            args: iter.collect(),
        })
    }

    /// Split a command line with shell-word rules (quotes respected)
    /// Returns None for blank input or unbalanced quotes
    pub fn parse(line: &str) -> Option<Self> {
        Self::from_argv(shlex::split(line)?)
    }

    /// Full argument vector including the program
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match shlex::try_join(self.argv()) {
            Ok(line) => f.write_str(&line),
            Err(_) => f.write_str(&self.argv().join(" ")),
        }
    }
}

/// One launchable item inside a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    pub command: LaunchCommand,
    /// The command exactly as written, for string commands
    pub command_line: Option<String>,
    pub enabled: bool,
    /// Run inside the configured terminal emulator
    pub terminal: bool,
}

impl AppEntry {
    pub fn launch_request(&self) -> LaunchRequest {
        LaunchRequest {
            name: self.name.clone(),
            command: self.command.clone(),
            command_line: self.command_line.clone(),
            terminal: self.terminal,
        }
    }
}

/// Named group of entries, rendered as one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<AppEntry>,
}

impl Category {
    /// Entries that get a button, in config order
    pub fn enabled_entries(&self) -> impl Iterator<Item = &AppEntry> {
        self.entries.iter().filter(|e| e.enabled)
    }
}

/// Owned copy of everything needed to start one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub name: String,
    pub command: LaunchCommand,
    pub command_line: Option<String>,
    pub terminal: bool,
}

impl LaunchRequest {
    /// Script for `sh -c`: the original line keeps its shell syntax,
    /// list commands are quoted word by word
    pub fn shell_script(&self) -> String {
        match &self.command_line {
            Some(line) => line.trim().to_string(),
            None => self.command.to_string(),
        }
    }
}
