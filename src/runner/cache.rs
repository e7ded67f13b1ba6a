use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::models::CacheRecord;
use crate::utils::write_file_replacing;

/// Read the cache record. A missing file is an empty record.
pub fn load_cache(path: &Path) -> Result<CacheRecord> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No cache record at {}, starting fresh", path.display());
            return Ok(CacheRecord::default());
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&raw).map_err(|source| Error::Cache {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the cache record as indented JSON
pub fn persist(path: &Path, record: &CacheRecord) -> Result<()> {
    let mut json = serde_json::to_string_pretty(record).map_err(|source| Error::Cache {
        path: path.to_path_buf(),
        source,
    })?;
    json.push('\n');
    write_file_replacing(path, json.as_bytes())?;
    debug!("Cache record written to {}", path.display());
    Ok(())
}
