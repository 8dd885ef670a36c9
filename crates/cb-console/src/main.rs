//! cb-cli: interactive command console for the confidential-bank client.

mod cli;
mod completion;
mod config;
mod editor;
mod highlighter;
mod history;
mod repl;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, init_config, load_config, load_config_from_path};
use repl::Repl;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            Cli::print_completions(*shell);
            return Ok(());
        }
        Some(Commands::Config { action }) => {
            return handle_config_command(action);
        }
        None => {}
    }

    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    apply_cli_overrides(&mut config, &cli);
    log::debug!("Loaded config: {:?}", config);

    let mut repl = Repl::new(config)?;
    repl.run()
}

/// Command-line flags take precedence over the config file.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.no_banner {
        config.startup.show_banner = false;
    }
    if cli.no_history {
        config.history.disabled = true;
    } else if let Some(path) = &cli.history_file {
        config.history.disabled = false;
        config.history.file = Some(path.clone());
    }
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            let path = init_config(*force)?;
            println!("Configuration file created at: {}", path.display());
            Ok(())
        }
    }
}
