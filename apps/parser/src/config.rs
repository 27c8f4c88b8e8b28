use std::path::PathBuf;

use anyhow::Result;

const DEFAULT_TEX_PATH: &str = "main.tex";
const DEFAULT_JSON_PATH: &str = "src/data/resume-data.json";

/// Extractor configuration loaded from environment variables.
/// Every variable has a default, so a bare invocation reads `main.tex` and
/// writes `src/data/resume-data.json` relative to the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            input_path: optional_env("RESUME_TEX_PATH")
                .unwrap_or_else(|| DEFAULT_TEX_PATH.to_string())
                .into(),
            output_path: optional_env("RESUME_JSON_PATH")
                .unwrap_or_else(|| DEFAULT_JSON_PATH.to_string())
                .into(),
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Config {
            input_path: input_path.into(),
            output_path: output_path.into(),
            rust_log: "info".to_string(),
        }
    }
}

/// Reads `key`, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
