use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::ExtractError;
use crate::models::ResumeRecord;

/// Writes `record` as pretty-printed JSON (two-space indent), creating parent
/// directories and replacing any previous file.
pub fn write_record(record: &ResumeRecord, path: &Path) -> Result<(), ExtractError> {
    let json = serde_json::to_string_pretty(record)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExtractError::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
        debug!("Ensured output directory {}", parent.display());
    }

    fs::write(path, json).map_err(|source| ExtractError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote resume record to {}", path.display());
    Ok(())
}
