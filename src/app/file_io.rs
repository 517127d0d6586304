//! Whole-file reads and writes.
//!
//! Files are small by assumption, so both directions are synchronous and
//! blocking on the UI thread. Writes go through a temporary file in the
//! destination directory followed by a rename, so a failed save never
//! leaves a half-written file at the target path.

use std::fs;
use std::path::Path;
use std::process;

use log::{info, warn};

use super::error::Result;

/// Read an entire file as UTF-8 text.
///
/// Invalid UTF-8 surfaces as an `io::Error` (`InvalidData`), so decode and
/// I/O failures present identically to the caller.
pub fn read_document(path: &str) -> Result<String> {
    let content = fs::read_to_string(path).inspect_err(|e| {
        warn!("failed to read {}: {}", path, e);
    })?;
    info!("read {} ({} bytes)", path, content.len());
    Ok(content)
}

/// Write `text` to `path` atomically: write a sibling temporary file,
/// then rename it over the target.
pub fn write_document(path: &str, text: &str) -> Result<()> {
    let target = Path::new(path);
    let dir = target.parent().filter(|p| !p.as_os_str().is_empty());
    let tmp = match dir {
        Some(dir) => dir.join(temp_name(target)),
        None => Path::new(&temp_name(target)).to_path_buf(),
    };

    let result = fs::write(&tmp, text).and_then(|_| fs::rename(&tmp, target));
    if let Err(ref e) = result {
        warn!("failed to write {}: {}", path, e);
        // Best effort; the temp file may never have been created.
        let _ = fs::remove_file(&tmp);
    } else {
        info!("wrote {} ({} bytes)", path, text.len());
    }
    result?;
    Ok(())
}

fn temp_name(target: &Path) -> String {
    let base = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    format!(".{}.{}.tmp", base, process::id())
}
