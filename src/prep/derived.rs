//! Derived numeric features
//!
//! Adds the building age and years-since-remodel columns computed from the
//! year columns of the housing dataset.

use crate::error::{PrepError, Result};
use polars::prelude::*;
use tracing::debug;

pub const AGE_IN_YEAR: &str = "age_in_year";
pub const YEARS_FROM_REMODEL: &str = "years_from_remodel";

/// Add `age_in_year = YrSold - YearBuilt` and
/// `years_from_remodel = YrSold - YearRemodAdd` as Float64 columns.
///
/// Nulls in either operand propagate to null. The caller's frame is left
/// untouched; re-applying to the result yields identical values.
pub fn add_derived_features(df: &DataFrame) -> Result<DataFrame> {
    debug!("adding derived year features");

    let mut result = df.clone();
    result.with_column(year_difference(df, "YrSold", "YearBuilt", AGE_IN_YEAR)?)?;
    result.with_column(year_difference(df, "YrSold", "YearRemodAdd", YEARS_FROM_REMODEL)?)?;
    Ok(result)
}

fn year_difference(df: &DataFrame, minuend: &str, subtrahend: &str, name: &str) -> Result<Series> {
    let a = numeric_column(df, minuend)?;
    let b = numeric_column(df, subtrahend)?;

    let values: Vec<Option<f64>> = a
        .into_iter()
        .zip(b.into_iter())
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(x - y),
            _ => None,
        })
        .collect();

    Ok(Series::new(name.into(), values))
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .map_err(|_| PrepError::MissingColumn(name.to_string()))?;
    let casted = column.cast(&DataType::Float64)?;
    Ok(casted.f64()?.clone())
}
