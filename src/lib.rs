//! Resistor Bands Library
//!
//! This library provides the resistor color-code table, the band decoder that
//! turns a set of color names into a resistance and tolerance, and (with the
//! `web` feature) the REST API that exposes both.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
#[cfg(feature = "web")]
pub mod web;
