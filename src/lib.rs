//! Ames housing-price feature engineering
//!
//! This crate prepares a feature matrix from the raw Ames housing train/test
//! datasets:
//! - Derived numeric features (building age, years since remodel)
//! - One-hot encoding of nominal columns with run-time category discovery
//! - Ordinal text ratings converted to numeric scores via scoring tables
//! - Abbreviation-to-full-form expansion of coded columns
//! - Train/test union with an explicit missing response marker
//! - Selection of the final predictor column list
//!
//! # Modules
//!
//! - [`prep`] - Column transforms, feature selection, and the pipeline driver
//! - [`data`] - CSV loading and saving
//! - [`error`] - Crate error type

pub mod data;
pub mod error;
pub mod prep;

pub use error::{PrepError, Result};
