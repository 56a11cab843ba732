//! One-hot encoding of nominal columns

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// One-hot encode a nominal column.
///
/// Distinct category values are discovered by a single scan of the column,
/// not declared a priori. Each category yields an indicator column named
/// `<column>_<value>` holding 1 where the row matches and 0 otherwise; rows
/// with a missing source value are 0 in every indicator. The source column
/// is dropped from the result; row count and order are preserved.
///
/// The indicator set is stable under row permutation, but the left-to-right
/// position of the generated columns is not part of the contract.
pub fn one_hot_encode(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let ca = super::string_column(df, column)?;

    // First-seen order; cardinality is small for housing categoricals.
    let mut categories: Vec<String> = Vec::new();
    for value in ca.into_iter().flatten() {
        if !categories.iter().any(|c| c == value) {
            categories.push(value.to_string());
        }
    }
    debug!(column, n_categories = categories.len(), "one-hot encoding");

    let mut result = df.clone();
    for category in &categories {
        let values: Vec<i32> = ca
            .into_iter()
            .map(|v| if v == Some(category.as_str()) { 1 } else { 0 })
            .collect();

        result.with_column(Series::new(format!("{}_{}", column, category).into(), values))?;
    }

    Ok(result.drop(column)?)
}
