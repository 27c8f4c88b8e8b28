mod config;
mod errors;
mod extraction;
mod models;
mod output;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::ExtractError;
use crate::extraction::extract_resume;
use crate::output::write_record;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the confirmation lines
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume parser v{}", env!("CARGO_PKG_VERSION"));

    let output_path = run(&config)?;

    println!("Successfully parsed LaTeX and generated resume data");
    println!("Output: {}", output_path.display());
    Ok(())
}

/// Reads the configured document, extracts it and writes the JSON record.
fn run(config: &Config) -> Result<PathBuf, ExtractError> {
    info!("Reading {}", config.input_path.display());
    let tex = fs::read_to_string(&config.input_path).map_err(|source| ExtractError::ReadInput {
        path: config.input_path.clone(),
        source,
    })?;

    let record = extract_resume(&tex);
    write_record(&record, &config.output_path)?;
    Ok(config.output_path.clone())
}
