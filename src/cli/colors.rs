//! Color table listing command.

use crate::cli::common::{print_json, CliResult};
use crate::models::{ColorDetails, ColorTable};
use clap::Args;
use serde::Serialize;

/// List the resistor band colors and the values they encode
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Show a single color instead of the whole table (case-insensitive)
    #[arg(value_name = "COLOR")]
    pub color: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ColorsOutput {
    colors: Vec<ColorDetails>,
    count: usize,
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let table = ColorTable::standard();

        let rows: Vec<ColorDetails> = match &self.color {
            // Unknown names are shown zeroed, the same way the API reports them
            Some(name) => vec![table.details(name)],
            None => table.entries().iter().map(ColorDetails::from).collect(),
        };

        if self.json {
            let count = rows.len();
            return print_json(&ColorsOutput {
                colors: rows,
                count,
            });
        }

        println!(
            "{:<8} {:>5} {:>14} {:>10}",
            "Color", "Digit", "Multiplier", "Tolerance"
        );
        for row in &rows {
            let tolerance = if row.tolerance > 0.0 {
                format!("±{}%", row.tolerance)
            } else {
                "-".to_string()
            };
            println!(
                "{:<8} {:>5} {:>14} {:>10}",
                row.name, row.value, row.multiplier, tolerance
            );
        }

        Ok(())
    }
}
