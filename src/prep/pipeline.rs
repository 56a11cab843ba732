//! Feature-preparation pipeline driver
//!
//! Sequences the column transforms in a fixed order: join the train/test
//! datasets, add derived year features, one-hot encode the configured nominal
//! columns, score the configured ordinal columns, select the predictor
//! features, zero-fill remaining missing values, and persist the result.

use crate::data;
use crate::error::Result;
use crate::prep::scoring::{default_scoring_tables, ScoringTable};
use crate::prep::{derived, encode, features, join, scoring};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Which columns receive the final zero-fill of missing values.
///
/// The processed file always contains the entire combined frame, so under
/// `SelectedFeatures` the persisted output keeps unfilled nulls outside the
/// selected feature columns. That matches the legacy pipeline; `EntireFrame`
/// is the stricter alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillScope {
    SelectedFeatures,
    EntireFrame,
}

/// Configuration for the feature-preparation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Directory holding the input files and receiving the output file.
    pub data_dir: PathBuf,

    /// Train file name (contains the response column).
    pub train_file: String,

    /// Test file name (lacks the response column).
    pub test_file: String,

    /// Output file name for the processed dataset.
    pub output_file: String,

    /// Response column name.
    pub response: String,

    /// Whether to add the derived year features after the join. They are
    /// only computed when all source year columns are present.
    pub derived_features: bool,

    /// Nominal columns to one-hot encode, in processing order.
    pub one_hot_columns: Vec<String>,

    /// Ordinal text columns with their scoring tables, in processing order.
    pub scoring_tables: Vec<(String, ScoringTable)>,

    /// Nominal feature groups whose indicator columns join the predictors.
    pub nominal_groups: Vec<String>,

    /// Quantitative feature groups whose `_score` columns join the predictors.
    pub quantitative_groups: Vec<String>,

    /// Scope of the final zero-fill.
    pub fill_scope: FillScope,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            train_file: "train.csv".to_string(),
            test_file: "test.csv".to_string(),
            output_file: "data_all.csv".to_string(),
            response: "SalePrice".to_string(),
            derived_features: true,
            one_hot_columns: vec!["Neighborhood".to_string(), "MSZoning".to_string()],
            scoring_tables: default_scoring_tables(),
            nominal_groups: vec!["Neighborhood".to_string(), "MSZoning".to_string()],
            quantitative_groups: vec![
                "Utilities".to_string(),
                "ExterQual".to_string(),
                "ExterCond".to_string(),
                "HeatingQC".to_string(),
            ],
            fill_scope: FillScope::SelectedFeatures,
        }
    }
}

impl PrepConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Builder method to set the response column.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    /// Builder method to set the nominal columns to one-hot encode.
    pub fn with_one_hot_columns(mut self, columns: Vec<String>) -> Self {
        self.one_hot_columns = columns;
        self
    }

    /// Builder method to set the ordinal columns and their scoring tables.
    pub fn with_scoring_tables(mut self, tables: Vec<(String, ScoringTable)>) -> Self {
        self.scoring_tables = tables;
        self
    }

    /// Builder method to set the fill scope.
    pub fn with_fill_scope(mut self, scope: FillScope) -> Self {
        self.fill_scope = scope;
        self
    }

    fn train_path(&self) -> PathBuf {
        self.data_dir.join(&self.train_file)
    }

    fn test_path(&self) -> PathBuf {
        self.data_dir.join(&self.test_file)
    }

    fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }
}

/// The feature-preparation pipeline.
pub struct Pipeline {
    config: PrepConfig,
}

impl Pipeline {
    /// Create a pipeline with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PrepConfig::default())
    }

    /// Create a pipeline with a custom configuration.
    pub fn with_config(config: PrepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// Run the full file-backed pipeline: load the train and test files,
    /// process them, and persist the entire combined frame. Returns the
    /// output path. Nothing is written when any stage fails.
    pub fn run(&self) -> Result<PathBuf> {
        let train = data::load_csv(&self.config.train_path())?;
        let test = data::load_csv(&self.config.test_path())?;
        info!(
            train_rows = train.height(),
            test_rows = test.height(),
            "loaded input datasets"
        );

        let (mut combined, selected) = self.run_frames(&train, &test)?;
        info!(
            rows = combined.height(),
            cols = combined.width(),
            n_features = selected.len(),
            "finished preprocessing"
        );

        let output = self.config.output_path();
        data::save_csv(&mut combined, &output)?;
        info!(path = %output.display(), "saved processed dataset");
        Ok(output)
    }

    /// Run the in-memory transformation chain on already-loaded frames.
    ///
    /// Returns the processed combined frame together with the selected
    /// predictor column names.
    pub fn run_frames(&self, train: &DataFrame, test: &DataFrame) -> Result<(DataFrame, Vec<String>)> {
        let mut frame = join::join_train_test(train, test, &self.config.response)?;

        if self.config.derived_features {
            let year_columns = ["YrSold", "YearBuilt", "YearRemodAdd"];
            if year_columns.iter().all(|c| frame.column(c).is_ok()) {
                frame = derived::add_derived_features(&frame)?;
            } else {
                warn!("year columns not present; skipping derived features");
            }
        }

        for column in &self.config.one_hot_columns {
            info!(column = %column, "one-hot encoding nominal column");
            frame = encode::one_hot_encode(&frame, column)?;
        }

        for (column, table) in &self.config.scoring_tables {
            info!(column = %column, "scoring ordinal column");
            frame = scoring::score_ordinal(&frame, column, table)?;
        }

        let selected = features::select_features(
            &frame,
            &self.config.nominal_groups,
            &self.config.quantitative_groups,
        );
        info!(features = ?selected, "features selected for modeling");

        match self.config.fill_scope {
            FillScope::SelectedFeatures => zero_fill(&mut frame, &selected)?,
            FillScope::EntireFrame => {
                let all: Vec<String> = frame
                    .get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                zero_fill(&mut frame, &all)?;
            }
        }

        Ok((frame, selected))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-fill missing values in the named numeric columns of the frame.
///
/// Selection is name-construction-only, so a named column may not exist in
/// the frame; such names are skipped here and validated, if at all, by the
/// downstream consumer.
fn zero_fill(frame: &mut DataFrame, columns: &[String]) -> Result<()> {
    for name in columns {
        let filled = {
            let column = match frame.column(name) {
                Ok(c) => c,
                Err(_) => {
                    debug!(column = %name, "selected feature not present; skipping fill");
                    continue;
                }
            };
            if !is_numeric_dtype(column.dtype()) || column.null_count() == 0 {
                continue;
            }
            column
                .as_materialized_series()
                .fill_null(FillNullStrategy::Zero)?
        };
        frame.with_column(filled)?;
    }
    Ok(())
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrepConfig::default();
        assert_eq!(config.response, "SalePrice");
        assert_eq!(config.one_hot_columns.len(), 2);
        assert_eq!(config.scoring_tables.len(), 8);
        assert_eq!(config.fill_scope, FillScope::SelectedFeatures);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PrepConfig::new()
            .with_data_dir("/tmp/housing")
            .with_response("Price")
            .with_fill_scope(FillScope::EntireFrame);

        assert_eq!(config.data_dir, PathBuf::from("/tmp/housing"));
        assert_eq!(config.response, "Price");
        assert_eq!(config.fill_scope, FillScope::EntireFrame);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = PrepConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PrepConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.response, config.response);
        assert_eq!(back.scoring_tables.len(), config.scoring_tables.len());
    }

    #[test]
    fn test_zero_fill_selected_only() {
        let mut frame = df!(
            "LotArea" => &[Some(8450i64), None],
            "GarageArea" => &[Some(500i64), None],
        )
        .unwrap();

        zero_fill(&mut frame, &["LotArea".to_string()]).unwrap();

        assert_eq!(frame.column("LotArea").unwrap().null_count(), 0);
        assert_eq!(frame.column("GarageArea").unwrap().null_count(), 1);
    }

    #[test]
    fn test_zero_fill_skips_absent_and_text_columns() {
        let mut frame = df!(
            "Neighborhood" => &[Some("NAmes"), None],
        )
        .unwrap();

        let names = vec!["Neighborhood".to_string(), "Utilities_score".to_string()];
        zero_fill(&mut frame, &names).unwrap();

        // Text column untouched, absent column skipped.
        assert_eq!(frame.column("Neighborhood").unwrap().null_count(), 1);
    }
}
