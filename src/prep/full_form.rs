//! Abbreviation-to-full-form expansion
//!
//! Some coded columns (for example `MSZoning`) carry short labels whose
//! descriptive form lives in an auxiliary lookup table.

use crate::error::{PrepError, Result};
use crate::prep::scoring::{FullFormTable, NA_LABEL};
use polars::prelude::*;
use tracing::info;

/// Expand an abbreviated column into its descriptive full form.
///
/// Missing values in the source column become the `"NA"` label; a new
/// `full_<column>` column holds the mapped descriptive string for every row.
/// A label without a table entry aborts with [`PrepError::UnknownCategory`].
pub fn expand_full_form(df: &DataFrame, column: &str, table: &FullFormTable) -> Result<DataFrame> {
    let ca = super::string_column(df, column)?;

    let mut n_substituted = 0usize;
    let mut labels: Vec<&str> = Vec::with_capacity(ca.len());
    for value in ca.into_iter() {
        match value {
            Some(v) => labels.push(v),
            None => {
                n_substituted += 1;
                labels.push(NA_LABEL);
            }
        }
    }
    if n_substituted > 0 {
        info!(column, rows = n_substituted, "missing values replaced with the NA label");
    }

    let mut full: Vec<&str> = Vec::with_capacity(labels.len());
    for label in &labels {
        match table.get(label) {
            Some(form) => full.push(form),
            None => {
                return Err(PrepError::UnknownCategory {
                    column: column.to_string(),
                    label: (*label).to_string(),
                })
            }
        }
    }

    let mut result = df.clone();
    result.with_column(Series::new(format!("full_{}", column).into(), full))?;
    result.with_column(Series::new(column.into(), labels))?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoning_table() -> FullFormTable {
        FullFormTable::from_pairs(&[
            ("RL", "Residential Low Density"),
            ("RM", "Residential Medium Density"),
            (NA_LABEL, "Not Available"),
        ])
    }

    #[test]
    fn test_expand_full_form() {
        let df = df!(
            "MSZoning" => &[Some("RL"), Some("RM"), None],
        )
        .unwrap();

        let result = expand_full_form(&df, "MSZoning", &zoning_table()).unwrap();

        let full: Vec<&str> = result
            .column("full_MSZoning")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(
            full,
            vec!["Residential Low Density", "Residential Medium Density", "Not Available"]
        );

        // Source column retained with the NA substitution applied.
        let labels: Vec<&str> = result
            .column("MSZoning")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(labels, vec!["RL", "RM", NA_LABEL]);
    }

    #[test]
    fn test_unknown_abbreviation() {
        let df = df!("MSZoning" => &["C (all)"]).unwrap();

        let err = expand_full_form(&df, "MSZoning", &zoning_table()).unwrap_err();
        assert!(matches!(err, PrepError::UnknownCategory { .. }));
    }

    #[test]
    fn test_missing_column() {
        let df = df!("a" => &["x"]).unwrap();
        let err = expand_full_form(&df, "MSZoning", &zoning_table()).unwrap_err();
        assert!(matches!(err, PrepError::MissingColumn(_)));
    }
}
