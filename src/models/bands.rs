//! Band selections read off a resistor and the values decoded from them.

use std::fmt;

/// Number of bands on the resistor being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandCount {
    /// Two significant digits, multiplier, tolerance
    Four,
    /// Three significant digits, multiplier, tolerance
    Five,
}

impl BandCount {
    /// Number of significant-digit bands for this encoding.
    #[must_use]
    pub const fn significant_digits(self) -> usize {
        match self {
            Self::Four => 2,
            Self::Five => 3,
        }
    }
}

/// Color names read off a resistor, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSelection {
    /// First significant digit band
    pub first_band: String,
    /// Second significant digit band
    pub second_band: String,
    /// Third significant digit band (5-band resistors only)
    pub third_band: Option<String>,
    /// Multiplier band
    pub multiplier_band: String,
    /// Tolerance band
    pub tolerance_band: String,
}

impl BandSelection {
    /// Creates a 4-band selection.
    pub fn four_band(
        first: impl Into<String>,
        second: impl Into<String>,
        multiplier: impl Into<String>,
        tolerance: impl Into<String>,
    ) -> Self {
        Self {
            first_band: first.into(),
            second_band: second.into(),
            third_band: None,
            multiplier_band: multiplier.into(),
            tolerance_band: tolerance.into(),
        }
    }

    /// Creates a 5-band selection.
    pub fn five_band(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
        multiplier: impl Into<String>,
        tolerance: impl Into<String>,
    ) -> Self {
        Self {
            third_band: Some(third.into()),
            ..Self::four_band(first, second, multiplier, tolerance)
        }
    }

    /// Determines the encoding. An empty third band counts as absent.
    #[must_use]
    pub fn band_count(&self) -> BandCount {
        match self.third_band.as_deref() {
            Some(third) if !third.is_empty() => BandCount::Five,
            _ => BandCount::Four,
        }
    }

    /// Significant-digit band names in reading order.
    #[must_use]
    pub fn significant_bands(&self) -> Vec<&str> {
        [
            Some(self.first_band.as_str()),
            Some(self.second_band.as_str()),
            self.third_band.as_deref(),
        ]
        .into_iter()
        .flatten()
        .take(self.band_count().significant_digits())
        .collect()
    }
}

/// Resistance and tolerance decoded from a band selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistorValue {
    /// Resistance in ohms
    pub resistance: f64,
    /// Tolerance in percent
    pub tolerance_percent: f64,
}

impl ResistorValue {
    /// Creates a new resistor value.
    #[must_use]
    pub const fn new(resistance: f64, tolerance_percent: f64) -> Self {
        Self {
            resistance,
            tolerance_percent,
        }
    }
}

impl fmt::Display for ResistorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ±{}%",
            format_ohms(self.resistance),
            trim_number(self.tolerance_percent)
        )
    }
}

/// Formats ohms with an SI prefix (e.g., 10000 -> "10 kΩ").
fn format_ohms(ohms: f64) -> String {
    const PREFIXES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];

    for (scale, prefix) in PREFIXES {
        if ohms.abs() >= scale {
            return format!("{} {prefix}Ω", trim_number(ohms / scale));
        }
    }
    format!("{} Ω", trim_number(ohms))
}

/// Renders a number with at most two decimals and no trailing zeros.
fn trim_number(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
