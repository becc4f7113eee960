//! HTTP server command.

use crate::cli::common::{CliError, CliResult};
use crate::cli::config::{config_path, load_config};
use crate::config::Config;
use crate::web::{self, AppState};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Start the HTTP API server
#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host name or IP address to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Config file to read instead of the platform default
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// Loads the config file and applies command-line overrides.
    pub fn resolve_config(&self) -> CliResult<Config> {
        let path = config_path(self.config.as_deref())?;
        if self.config.is_some() && !path.exists() {
            return Err(CliError::io(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let mut config = load_config(&path)?;
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        Ok(config)
    }

    /// Execute the serve command
    pub async fn execute(&self, config: &Config) -> CliResult<()> {
        let addr = config
            .server
            .socket_addr()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        info!("Color table loaded, serving on http://{addr}/docs");

        web::run_server(AppState::new(), addr)
            .await
            .map_err(|e| CliError::io(format!("Server error: {e:#}")))
    }
}
