//! CLI command handlers for Resistor Values.
//!
//! This module provides headless, scriptable access to the color table and
//! the band decoder, plus the command that starts the HTTP server.

pub mod colors;
pub mod common;
pub mod config;
pub mod decode;
#[cfg(feature = "web")]
pub mod serve;

// Re-export types used by main.rs and tests
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use decode::DecodeArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
