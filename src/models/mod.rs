//! Data models for resistor color bands and decoded values.
//!
//! This module contains the color table and the transient request/result
//! records. Models are independent of the HTTP layer and the CLI.

pub mod bands;
pub mod color;

// Re-export all model types
pub use bands::{BandCount, BandSelection, ResistorValue};
pub use color::{ColorDetails, ColorEntry, ColorTable};
