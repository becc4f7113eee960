//! Service layer for business logic.
//!
//! This module contains services that operate on the models without knowing
//! about the HTTP layer or the CLI.

pub mod decoder;

// Re-export commonly used types
pub use decoder::BandDecoder;
