//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display the effective configuration
    Show(ConfigShowArgs),
    /// Write a default configuration file
    Init(ConfigInitArgs),
}

/// Display the effective configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Config file to read instead of the platform default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a default configuration file
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file instead of the platform default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    fn execute(&self) -> CliResult<()> {
        let path = config_path(self.config.as_deref())?;
        let config = load_config(&path)?;

        if self.json {
            return print_json(&config);
        }

        let text = toml::to_string_pretty(&config)
            .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
        println!("# {}", path.display());
        print!("{text}");
        Ok(())
    }
}

impl ConfigInitArgs {
    fn execute(&self) -> CliResult<()> {
        let path = config_path(self.config.as_deref())?;

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}

/// Uses the explicit path if given, otherwise the platform default.
pub fn config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path().map_err(|e| CliError::io(format!("{e:#}"))),
    }
}

/// Loads a config file, mapping parse and validation failures to CLI errors.
pub fn load_config(path: &Path) -> CliResult<Config> {
    Config::load_from(path).map_err(|e| CliError::io(format!("{e:#}")))
}
