//! Resistor Values - resistor color-band API server and CLI
//!
//! Starts the HTTP API by default; subcommands expose the color table and the
//! band decoder directly from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Start the API server (port 5000, or the value in config.toml)
//! resistor-bands
//!
//! # Specify port and bind address
//! resistor-bands serve --port 8080 --host 0.0.0.0
//!
//! # Decode a 4-band resistor
//! resistor-bands decode --first brown --second black --multiplier red --tolerance gold
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resistor_bands::cli::{CliError, ColorsArgs, ConfigArgs, DecodeArgs, ServeArgs};
use resistor_bands::constants::APP_BINARY_NAME;

/// Resistor Values - decode resistor color bands
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP API server (default)
    Serve(ServeArgs),
    /// List band colors and their values
    Colors(ColorsArgs),
    /// Calculate a resistor value from band colors
    Decode(DecodeArgs),
    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Initializes tracing. `RUST_LOG` wins over the given default filter.
///
/// Logs go to stderr so JSON written to stdout stays parseable.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            let config = args.resolve_config()?;
            let level = if cli.verbose {
                "debug"
            } else {
                config.logging.level.as_str()
            };
            init_tracing(level);
            args.execute(&config).await
        }
        Command::Colors(args) => {
            init_tracing(if cli.verbose { "debug" } else { "warn" });
            args.execute()
        }
        Command::Decode(args) => {
            init_tracing(if cli.verbose { "debug" } else { "warn" });
            args.execute()
        }
        Command::Config(args) => {
            init_tracing(if cli.verbose { "debug" } else { "warn" });
            args.execute()
        }
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let code = u8::try_from(err.exit_code.code()).unwrap_or(1);
            std::process::ExitCode::from(code)
        }
    }
}
