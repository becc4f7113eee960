//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Resistor Values";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "resistor-bands";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ResistorBands";
