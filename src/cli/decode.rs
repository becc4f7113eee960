//! Band decoding command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{BandSelection, ColorTable};
use crate::services::BandDecoder;
use clap::Args;
use serde::Serialize;

/// Calculate a resistor's value from its band colors
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// First significant digit band
    #[arg(long, value_name = "COLOR")]
    pub first: String,

    /// Second significant digit band
    #[arg(long, value_name = "COLOR")]
    pub second: String,

    /// Third significant digit band (5-band resistors only)
    #[arg(long, value_name = "COLOR")]
    pub third: Option<String>,

    /// Multiplier band
    #[arg(long, value_name = "COLOR")]
    pub multiplier: String,

    /// Tolerance band
    #[arg(long, value_name = "COLOR")]
    pub tolerance: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail instead of treating unrecognized colors as zero
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecodeOutput {
    resistor_value: f64,
    tolerance: f64,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let table = ColorTable::standard();
        let bands = BandSelection {
            first_band: self.first.clone(),
            second_band: self.second.clone(),
            third_band: self.third.clone().filter(|band| !band.is_empty()),
            multiplier_band: self.multiplier.clone(),
            tolerance_band: self.tolerance.clone(),
        };

        if self.strict {
            check_known(&table, &bands)?;
        }

        let value = BandDecoder::new(&table).decode(&bands);

        if self.json {
            return print_json(&DecodeOutput {
                resistor_value: value.resistance,
                tolerance: value.tolerance_percent,
            });
        }

        println!("{value}");
        Ok(())
    }
}

/// Rejects selections that name colors missing from the table.
fn check_known(table: &ColorTable, bands: &BandSelection) -> CliResult<()> {
    let unknown: Vec<&str> = bands
        .significant_bands()
        .into_iter()
        .chain([bands.multiplier_band.as_str(), bands.tolerance_band.as_str()])
        .filter(|name| table.lookup(name).is_none())
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "Unrecognized band color(s): {}. Known colors: {}",
            unknown.join(", "),
            table.names().join(", ")
        )))
    }
}
