use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

/// Read the whole backing file. `Ok(None)` when it does not exist.
pub fn read_file(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Overwrite `path` in place. A write that fails after the file was opened
/// removes the partial file so the next load does not see half a list.
pub fn write_in_place(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    if let Err(e) = file.write_all(bytes).and_then(|_| file.flush()) {
        drop(file);
        if let Err(rm) = fs::remove_file(path) {
            warn!(
                path = %path.display(),
                error = %rm,
                "Failed to remove partially written report file"
            );
        }
        return Err(e);
    }
    Ok(())
}

/// Atomic file write: write to `<path>.tmp`, then rename over `path`.
/// The temp file is removed if any step fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = temp_path(path);
    let result = fs::File::create(&tmp)
        .and_then(|mut file| file.write_all(bytes).and_then(|_| file.sync_all()))
        .and_then(|_| fs::rename(&tmp, path));
    if result.is_err() && tmp.exists() {
        if let Err(rm) = fs::remove_file(&tmp) {
            warn!(path = %tmp.display(), error = %rm, "Failed to remove temporary report file");
        }
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
