//! Feature engineering CLI for the Ames housing-price dataset

use ames_prep::prep::{FillScope, Pipeline, PrepConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ames-prep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Feature engineering for the Ames housing-price dataset")]
struct Cli {
    /// Directory containing the input CSV files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Train file name (contains the response column)
    #[arg(long, default_value = "train.csv")]
    train: String,

    /// Test file name (lacks the response column)
    #[arg(long, default_value = "test.csv")]
    test: String,

    /// Output file name for the processed dataset
    #[arg(short, long, default_value = "data_all.csv")]
    output: String,

    /// Response column name
    #[arg(short, long, default_value = "SalePrice")]
    response: String,

    /// Zero-fill every numeric column instead of only the selected features
    #[arg(long)]
    fill_all: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ames_prep=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = PrepConfig::default()
        .with_data_dir(cli.data_dir)
        .with_response(cli.response);
    config.train_file = cli.train;
    config.test_file = cli.test;
    config.output_file = cli.output;
    if cli.fill_all {
        config.fill_scope = FillScope::EntireFrame;
    }

    Pipeline::with_config(config).run()?;
    Ok(())
}
