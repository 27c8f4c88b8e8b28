use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of an extraction run.
///
/// Only I/O at the edges can fail: a section that cannot be found never
/// produces an error, it produces an empty field instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read input document {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize resume record: {0}")]
    Serialize(#[from] serde_json::Error),
}
