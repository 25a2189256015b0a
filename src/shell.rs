//! Application lifecycle: Init → Loaded → Running → Closed, or Init → Failed → Exit

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::{ConfigError, LauncherConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Init,
    Loaded,
    Running,
    Closed,
    Failed,
    Exit,
}

impl ShellState {
    fn can_become(self, next: ShellState) -> bool {
        use ShellState::*;
        matches!(
            (self, next),
            (Init, Loaded) | (Loaded, Running) | (Running, Closed) | (Init, Failed) | (Failed, Exit)
        )
    }
}

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("failed to load config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("invalid lifecycle transition {from:?} -> {to:?}")]
    InvalidTransition { from: ShellState, to: ShellState },
}

pub struct Shell {
    state: ShellState,
    config_path: PathBuf,
}

impl Shell {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            state: ShellState::Init,
            config_path,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn transition(&mut self, next: ShellState) -> Result<(), ShellError> {
        if !self.state.can_become(next) {
            return Err(ShellError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        debug!(from = ?self.state, to = ?next, "Shell state change");
        self.state = next;
        Ok(())
    }

    /// Init → Loaded on success, Init → Failed on a config error
    pub fn load(&mut self) -> Result<LauncherConfig, ShellError> {
        if self.state != ShellState::Init {
            return Err(ShellError::InvalidTransition {
                from: self.state,
                to: ShellState::Loaded,
            });
        }

        match LauncherConfig::load(&self.config_path) {
            Ok(config) => {
                self.transition(ShellState::Loaded)?;
                Ok(config)
            }
            Err(source) => {
                self.transition(ShellState::Failed)?;
                let err = ShellError::Config {
                    path: self.config_path.clone(),
                    source,
                };
                error!(error = %err, "Launcher config rejected");
                Err(err)
            }
        }
    }

    /// Loaded → Running, right before the event loop starts
    pub fn start(&mut self) -> Result<(), ShellError> {
        self.transition(ShellState::Running)
    }

    /// Running → Closed once the window is gone
    pub fn close(&mut self) -> Result<(), ShellError> {
        self.transition(ShellState::Closed)
    }

    /// Failed → Exit
    pub fn abort(&mut self) -> Result<(), ShellError> {
        self.transition(ShellState::Exit)
    }

    /// Only a window closed after a clean run counts as success
    pub fn succeeded(&self) -> bool {
        self.state == ShellState::Closed
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
