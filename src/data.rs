//! Dataset loading and saving
//!
//! Thin wrappers around the polars CSV reader/writer. The pipeline treats
//! these as external collaborators: a tabular dataset comes in, a tabular
//! dataset goes out.

use crate::error::{PrepError, Result};
use crate::prep::scoring::FullFormTable;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Load a CSV file with a header row and inferred schema.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(file)
        .finish()?;

    Ok(df)
}

/// Save a DataFrame as a CSV file with a header row.
pub fn save_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;

    CsvWriter::new(&mut file).finish(df)?;
    Ok(())
}

/// Load an abbreviation lookup table from a two-column (`abbr`, `full`) CSV.
///
/// Polars only treats empty fields as missing, so the literal text "NA" in
/// the lookup file survives as a regular label rather than becoming null.
pub fn load_full_form(path: &Path) -> Result<FullFormTable> {
    let df = load_csv(path)?;

    let abbr = df
        .column("abbr")
        .map_err(|_| PrepError::MissingColumn("abbr".to_string()))?
        .str()?
        .clone();
    let full = df
        .column("full")
        .map_err(|_| PrepError::MissingColumn("full".to_string()))?
        .str()?
        .clone();

    let mut table = FullFormTable::new();
    for (a, f) in abbr.into_iter().zip(full.into_iter()) {
        if let (Some(a), Some(f)) = (a, f) {
            table.insert(a, f);
        }
    }

    Ok(table)
}
