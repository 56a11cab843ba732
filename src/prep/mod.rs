//! Feature transformation module
//!
//! Provides the column transforms and pipeline driver used to turn the raw
//! train/test housing datasets into one processed feature frame:
//! - Derived numeric features (age, years since remodel)
//! - One-hot encoding with run-time category discovery
//! - Ordinal text scoring via explicit scoring tables
//! - Abbreviation-to-full-form expansion
//! - Train/test union with an explicit missing response marker
//! - Predictor feature selection

pub mod derived;
pub mod encode;
pub mod features;
pub mod full_form;
pub mod join;
pub mod pipeline;
pub mod scoring;

pub use derived::add_derived_features;
pub use encode::one_hot_encode;
pub use features::{select_features, BASE_FEATURES};
pub use full_form::expand_full_form;
pub use join::join_train_test;
pub use pipeline::{FillScope, Pipeline, PrepConfig};
pub use scoring::{default_scoring_tables, score_ordinal, FullFormTable, ScoringTable, NA_LABEL};

use crate::error::{PrepError, Result};
use polars::prelude::*;

/// Fetch a column as a string chunked array, mapping absence to MissingColumn.
pub(crate) fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| PrepError::MissingColumn(name.to_string()))?;
    Ok(column.str()?)
}
