//! Resistor color code table.
//!
//! The table holds the twelve standard band colors in their conventional
//! order (Black through White, then Gold and Silver). It is built once and
//! shared read-only; lookups are case-insensitive.

use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Standard color code: name, digit, multiplier, tolerance percent.
const STANDARD_COLORS: [(&str, u8, f64, f64); 12] = [
    ("Black", 0, 1.0, 0.0),
    ("Brown", 1, 10.0, 1.0),
    ("Red", 2, 100.0, 2.0),
    ("Orange", 3, 1_000.0, 0.0),
    ("Yellow", 4, 10_000.0, 0.0),
    ("Green", 5, 100_000.0, 0.5),
    ("Blue", 6, 1_000_000.0, 0.25),
    ("Violet", 7, 10_000_000.0, 0.1),
    ("Grey", 8, 100_000_000.0, 0.05),
    ("White", 9, 1_000_000_000.0, 0.0),
    ("Gold", 0, 0.1, 5.0),
    ("Silver", 0, 0.01, 10.0),
];

/// A single band color and the values it encodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Display name (e.g., "Brown")
    pub name: String,
    /// Digit value when used as a significant band (0-9)
    pub digit: u8,
    /// Scale factor when used as the multiplier band
    pub multiplier: f64,
    /// Tolerance in percent when used as the tolerance band (0 if unused)
    pub tolerance: f64,
}

impl ColorEntry {
    /// Creates a new color entry.
    pub fn new(name: impl Into<String>, digit: u8, multiplier: f64, tolerance: f64) -> Self {
        Self {
            name: name.into(),
            digit,
            multiplier,
            tolerance,
        }
    }

    /// Applies this color's multiplier to a significand.
    ///
    /// Decade fractions (Gold, Silver) divide by the matching power of ten
    /// instead of multiplying by an inexact binary fraction, so `270 x 0.1`
    /// comes out as exactly `27`. Any other multiplier is applied as is.
    #[must_use]
    pub fn scale(&self, significand: u32) -> f64 {
        let significand = f64::from(significand);
        match self.decade_divisor() {
            Some(divisor) => significand / divisor,
            None => significand * self.multiplier,
        }
    }

    /// `10^n` when the multiplier is `1 / 10^n` for some `n >= 1`.
    fn decade_divisor(&self) -> Option<f64> {
        if !(self.multiplier > 0.0 && self.multiplier < 1.0) {
            return None;
        }
        let inverse = 1.0 / self.multiplier;
        let divisor = 10_f64.powf(inverse.log10().round());
        ((inverse - divisor).abs() <= divisor * 1e-9).then_some(divisor)
    }
}

/// The values a color encodes, as reported to API and CLI users.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "web", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ColorDetails {
    /// Color name
    pub name: String,
    /// Digit value as a significant band
    pub value: u8,
    /// Multiplier as a multiplier band
    pub multiplier: f64,
    /// Tolerance percent as a tolerance band
    pub tolerance: f64,
}

impl ColorDetails {
    /// Zeroed details for a name that is not in the table.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 0,
            multiplier: 0.0,
            tolerance: 0.0,
        }
    }
}

impl From<&ColorEntry> for ColorDetails {
    fn from(entry: &ColorEntry) -> Self {
        Self {
            name: entry.name.clone(),
            value: entry.digit,
            multiplier: entry.multiplier,
            tolerance: entry.tolerance,
        }
    }
}

/// Immutable, ordered color table with case-insensitive lookup.
#[derive(Debug, Clone)]
pub struct ColorTable {
    /// Entries in fixed table order
    entries: Vec<ColorEntry>,
    /// Lowercased name -> index into `entries`
    lookup: HashMap<String, usize>,
}

impl ColorTable {
    /// Builds the standard twelve-color resistor table.
    #[must_use]
    pub fn standard() -> Self {
        let entries = STANDARD_COLORS
            .iter()
            .map(|&(name, digit, multiplier, tolerance)| {
                ColorEntry::new(name, digit, multiplier, tolerance)
            })
            .collect::<Vec<_>>();

        let lookup = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.name.to_lowercase(), idx))
            .collect();

        Self { entries, lookup }
    }

    /// Builds a table from custom entries, preserving their order.
    ///
    /// Fails if a name is empty or if two names collide case-insensitively.
    pub fn from_entries(entries: Vec<ColorEntry>) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                bail!("Color entry {idx} has an empty name");
            }
            if lookup.insert(entry.name.to_lowercase(), idx).is_some() {
                bail!("Duplicate color name: {}", entry.name);
            }
        }

        Ok(Self { entries, lookup })
    }

    /// Finds a color by name, ignoring case.
    ///
    /// Returns `None` for names that are not in the table.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ColorEntry> {
        let idx = self.lookup.get(&name.to_lowercase())?;
        self.entries.get(*idx)
    }

    /// Returns the color names in table order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Returns all entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Details for a color, zeroed under the requested name when unknown.
    #[must_use]
    pub fn details(&self, name: &str) -> ColorDetails {
        self.lookup(name)
            .map_or_else(|| ColorDetails::unknown(name), ColorDetails::from)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}
