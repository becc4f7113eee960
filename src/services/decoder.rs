//! Band decoding service.
//!
//! Converts the color names read off a resistor into its resistance and
//! tolerance using the color table.

use tracing::debug;

use crate::models::{BandCount, BandSelection, ColorEntry, ColorTable, ResistorValue};

/// Stateless decoder from band colors to a resistor value.
///
/// Unrecognized color names never fail the decode: a significant band with an
/// unknown color contributes no digit, and an unknown multiplier or tolerance
/// band leaves that part of the result at zero.
#[derive(Debug, Clone, Copy)]
pub struct BandDecoder<'a> {
    table: &'a ColorTable,
}

impl<'a> BandDecoder<'a> {
    /// Creates a decoder backed by the given color table.
    #[must_use]
    pub const fn new(table: &'a ColorTable) -> Self {
        Self { table }
    }

    /// Decodes a band selection into a resistance and tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_bands::models::{BandSelection, ColorTable};
    /// use resistor_bands::services::BandDecoder;
    ///
    /// let table = ColorTable::standard();
    /// let bands = BandSelection::four_band("Brown", "Black", "Red", "Gold");
    /// let value = BandDecoder::new(&table).decode(&bands);
    /// assert_eq!(value.resistance, 10_000.0);
    /// assert_eq!(value.tolerance_percent, 5.0);
    /// ```
    #[must_use]
    pub fn decode(&self, bands: &BandSelection) -> ResistorValue {
        let significand = self.significand(bands);

        let resistance = self
            .resolve("multiplier", &bands.multiplier_band)
            .map_or(0.0, |entry| entry.scale(significand));

        let tolerance_percent = self
            .resolve("tolerance", &bands.tolerance_band)
            .map_or(0.0, |entry| entry.tolerance);

        debug!(
            significand,
            resistance, tolerance_percent, "decoded resistor bands"
        );

        ResistorValue::new(resistance, tolerance_percent)
    }

    /// Folds the significant-digit bands into an integer.
    ///
    /// 4-band resistors get a trailing zero digit, so Brown-Black decodes
    /// to 100 rather than 10.
    fn significand(&self, bands: &BandSelection) -> u32 {
        let digits = bands
            .significant_bands()
            .into_iter()
            .filter_map(|name| self.resolve("digit", name))
            .fold(0_u32, |acc, entry| acc * 10 + u32::from(entry.digit));

        match bands.band_count() {
            BandCount::Four => digits * 10,
            BandCount::Five => digits,
        }
    }

    fn resolve(&self, role: &str, name: &str) -> Option<&'a ColorEntry> {
        let entry = self.table.lookup(name);
        if entry.is_none() {
            debug!(role, band = name, "unrecognized band color, treating as zero");
        }
        entry
    }
}
