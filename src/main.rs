#![forbid(unsafe_code)]

mod config;
mod gui;
mod launcher;
mod shell;
mod types;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tracing::{error, info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::LauncherConfig;
use launcher::ProcessLauncher;
use shell::Shell;

/// Environment variable overriding the log level (error|warn|info|debug|trace)
const LOG_ENV: &str = "LAUNCHER_LOG";

#[derive(Parser, Debug)]
#[command(version, about = "Tabbed launcher for the applications listed in a JSON config")]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn log_level() -> TraceLevel {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(TraceLevel::INFO)
}

/// SIGINT/SIGTERM only raise the flag; the window closes itself on its next frame
fn register_shutdown_signals(flag: &Arc<AtomicBool>) {
    #[cfg(unix)]
    {
        use signal_hook::consts::{SIGINT, SIGTERM};
        for signal in [SIGINT, SIGTERM] {
            if let Err(e) = signal_hook::flag::register(signal, Arc::clone(flag)) {
                tracing::warn!(signal = signal, error = %e, "Failed to register signal handler");
            }
        }
    }
    #[cfg(not(unix))]
    let _ = flag;
}

fn run(shell: &mut Shell, config: LauncherConfig) -> Result<()> {
    let shutdown = Arc::new(AtomicBool::new(false));
    register_shutdown_signals(&shutdown);

    let launcher = ProcessLauncher::new(config.settings.terminal.clone());

    shell.start()?;
    gui::run_gui(
        config,
        shell.config_path().to_path_buf(),
        Box::new(launcher),
        shutdown,
    )?;
    shell.close()?;

    info!("Launcher exited cleanly");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    let config_path = args.config.unwrap_or_else(LauncherConfig::default_path);
    let mut shell = Shell::new(config_path);
    info!(path = %shell.config_path().display(), "Starting launcher");

    let config = match shell.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Err(e) = shell.abort() {
                error!(error = %e, "Lifecycle error while aborting");
            }
            return shell.exit_code();
        }
    };

    if let Err(e) = run(&mut shell, config) {
        error!(error = %format!("{e:#}"), "Launcher terminated with an error");
        eprintln!("Error: {e:#}");
    }

    info!(state = ?shell.state(), "Launcher stopped");
    shell.exit_code()
}
