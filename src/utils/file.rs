use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Safely move a file with fallback to copy+delete if rename fails
pub fn safe_move_file(src: &Path, dest: &Path) -> Result<()> {
    // First try to rename (fast path)
    match fs::rename(src, dest) {
        Ok(_) => Ok(()),
        Err(e) => {
            debug!("Rename failed for {}, trying copy+delete: {}", src.display(), e);

            fs::copy(src, dest)?;

            if let Err(e) = fs::remove_file(src) {
                // Destination is complete; leave the source behind
                debug!("Could not delete source file {} after copying: {}", src.display(), e);
            }
            Ok(())
        }
    }
}

/// Write `contents` next to `path` and move it into place, so readers never
/// see a half-written file
pub fn write_file_replacing(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = Path::new(&staging);

    fs::write(staging, contents)?;
    safe_move_file(staging, path)
}
