//! Train/test union

use crate::error::{PrepError, Result};
use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::info;

/// Concatenate the train and test datasets into one frame.
///
/// The response column is cast to Float64 and appended to the test rows as
/// an all-null column, so every test-segment response holds an explicit
/// missing marker. Train rows come first, then test rows, each segment in
/// its original order; the contiguous index ranges `[0, train.height())` and
/// `[train.height(), total)` let later code split the segments back apart.
///
/// Fails with [`PrepError::SchemaMismatch`] unless the train columns equal
/// the test columns plus exactly the response.
pub fn join_train_test(train: &DataFrame, test: &DataFrame, response: &str) -> Result<DataFrame> {
    let train_cols: BTreeSet<String> = train
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let test_cols: BTreeSet<String> = test
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if !train_cols.contains(response) {
        return Err(PrepError::MissingColumn(response.to_string()));
    }

    let mut expected = train_cols;
    expected.remove(response);
    if expected != test_cols {
        let only_train: Vec<String> = expected.difference(&test_cols).cloned().collect();
        let only_test: Vec<String> = test_cols.difference(&expected).cloned().collect();
        return Err(PrepError::SchemaMismatch(format!(
            "columns only in train: {only_train:?}, columns only in test: {only_test:?}"
        )));
    }

    // Float64 response so the test segment can hold a true null marker
    // regardless of the dtype inferred from the train file.
    let mut train = train.clone();
    let response_f64 = train.column(response)?.cast(&DataType::Float64)?;
    train.with_column(response_f64)?;

    let mut test = test.clone();
    test.with_column(Series::full_null(
        response.into(),
        test.height(),
        &DataType::Float64,
    ))?;
    let test = test.select(train.get_column_names_owned())?;

    let combined = train.vstack(&test)?;
    info!(
        train_rows = train.height(),
        test_rows = test.height(),
        total = combined.height(),
        "joined train and test datasets"
    );
    Ok(combined)
}
