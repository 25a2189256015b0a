//! Fire-and-forget process launching

use std::io;
use std::process::{Child, Command, Stdio};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::types::{LaunchCommand, LaunchRequest};

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("'{name}' has nothing to run")]
    EmptyCommand { name: String },

    #[error("executable not found: {program}")]
    NotFound { program: String },

    #[error("permission denied: {program}")]
    PermissionDenied { program: String },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    fn from_io(program: &str, source: io::Error) -> Self {
        let program = program.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { program },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { program },
            _ => Self::Spawn { program, source },
        }
    }
}

/// A started process; the launcher keeps no handle to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launched {
    pub pid: u32,
}

/// Starts launch requests; the GUI only talks to this trait
pub trait Launch {
    fn launch(&self, request: &LaunchRequest) -> Result<Launched, LaunchError>;
}

pub struct ProcessLauncher {
    terminal: String,
}

impl ProcessLauncher {
    /// `terminal` is the emulator command used for terminal entries
    pub fn new(terminal: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
        }
    }

    /// Final command line for a request, wrapping terminal entries
    pub fn build_command(&self, request: &LaunchRequest) -> Result<LaunchCommand, LaunchError> {
        if !request.terminal {
            return Ok(request.command.clone());
        }

        let terminal = LaunchCommand::parse(&self.terminal).ok_or_else(|| {
            LaunchError::EmptyCommand {
                name: request.name.clone(),
            }
        })?;
        // Keep the terminal open once the command finishes
        let script = format!("{}; exec \"${{SHELL:-sh}}\"", request.shell_script());

        let mut argv = terminal.args;
        argv.extend(["--".to_string(), "sh".to_string(), "-c".to_string(), script]);
        Ok(LaunchCommand {
            program: terminal.program,
            args: argv,
        })
    }
}

impl Launch for ProcessLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<Launched, LaunchError> {
        let command = self.build_command(request)?;

        let mut process = Command::new(&command.program);
        process.args(&command.args).stdin(Stdio::null());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // Own process group: Ctrl-C on the launcher's terminal must not reach it
            process.process_group(0);
        }

        let child = process
            .spawn()
            .map_err(|e| LaunchError::from_io(&command.program, e))?;
        let pid = child.id();
        info!(app = %request.name, pid = pid, command = %command, "Launched application");

        reap_in_background(child, request.name.clone());
        Ok(Launched { pid })
    }
}

/// Collect the exit status off the UI thread so the child never lingers as a zombie
fn reap_in_background(mut child: Child, name: String) {
    let pid = child.id();
    let spawned = std::thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => debug!(app = %name, pid = pid, %status, "Application exited"),
            Err(e) => warn!(app = %name, pid = pid, error = %e, "Failed to wait for application"),
        });

    if let Err(e) = spawned {
        warn!(pid = pid, error = %e, "Could not start reaper thread");
    }
}
