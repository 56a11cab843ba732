//! Scoring tables and ordinal text scoring
//!
//! Several housing columns store a quantitative rating as text (for example
//! `ExterQual` holds `Ex`/`Gd`/`TA`/`Fa`/`Po`). A [`ScoringTable`] maps each
//! rating label, including the `"NA"` sentinel for missing observations, to
//! an integer score so the column can be used as a numeric predictor.

use crate::error::{PrepError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Sentinel label substituted for missing values before any table lookup.
pub const NA_LABEL: &str = "NA";

/// Mapping from an ordinal rating label to an integer score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringTable {
    map: HashMap<String, i64>,
}

impl ScoringTable {
    /// Build a table from `(label, score)` pairs.
    pub fn from_pairs(pairs: &[(&str, i64)]) -> Self {
        Self {
            map: pairs
                .iter()
                .map(|(label, score)| (label.to_string(), *score))
                .collect(),
        }
    }

    /// Look up the score for a label.
    pub fn get(&self, label: &str) -> Option<i64> {
        self.map.get(label).copied()
    }

    /// Number of labels in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Mapping from an abbreviation label to its descriptive full form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullFormTable {
    map: HashMap<String, String>,
}

impl FullFormTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(abbr, full)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            map: pairs
                .iter()
                .map(|(abbr, full)| (abbr.to_string(), full.to_string()))
                .collect(),
        }
    }

    pub fn insert(&mut self, abbr: &str, full: &str) {
        self.map.insert(abbr.to_string(), full.to_string());
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.map.get(label).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The static scoring tables for the ordinal text columns of the housing
/// dataset, in pipeline processing order.
pub fn default_scoring_tables() -> Vec<(String, ScoringTable)> {
    let quality = [("Ex", 5), ("Gd", 4), ("TA", 3), ("Fa", 2), ("Po", 1), (NA_LABEL, 0)];

    vec![
        (
            "Utilities".to_string(),
            ScoringTable::from_pairs(&[
                ("AllPub", 4),
                ("NoSewr", 3),
                ("NoSeWa", 2),
                ("ELO", 1),
                (NA_LABEL, 0),
            ]),
        ),
        ("ExterQual".to_string(), ScoringTable::from_pairs(&quality)),
        ("ExterCond".to_string(), ScoringTable::from_pairs(&quality)),
        ("HeatingQC".to_string(), ScoringTable::from_pairs(&quality)),
        ("BsmtQual".to_string(), ScoringTable::from_pairs(&quality)),
        ("BsmtCond".to_string(), ScoringTable::from_pairs(&quality)),
        (
            "BsmtExposure".to_string(),
            ScoringTable::from_pairs(&[
                ("Gd", 4),
                ("Av", 3),
                ("Mn", 2),
                ("No", 1),
                (NA_LABEL, 0),
            ]),
        ),
        (
            "BsmtFinType1".to_string(),
            ScoringTable::from_pairs(&[
                ("GLQ", 6),
                ("ALQ", 5),
                ("BLQ", 4),
                ("Rec", 3),
                ("LwQ", 2),
                ("Unf", 1),
                (NA_LABEL, 0),
            ]),
        ),
    ]
}

/// Convert an ordinal text column to a numeric score column.
///
/// Missing values in the source column are first replaced with the `"NA"`
/// label; the source column is kept with that substitution applied. A new
/// `<column>_score` column holds the table lookup for every row. A label
/// without a table entry aborts with [`PrepError::UnknownCategory`] rather
/// than defaulting, since a silent default would corrupt the numeric scale.
pub fn score_ordinal(df: &DataFrame, column: &str, table: &ScoringTable) -> Result<DataFrame> {
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

    let mut scores: Vec<i64> = Vec::with_capacity(labels.len());
    for label in &labels {
        match table.get(label) {
            Some(score) => scores.push(score),
            None => {
                return Err(PrepError::UnknownCategory {
                    column: column.to_string(),
                    label: (*label).to_string(),
                })
            }
        }
    }

    let mut result = df.clone();
    result.with_column(Series::new(format!("{}_score", column).into(), scores))?;
    result.with_column(Series::new(column.into(), labels))?;
    Ok(result)
}
