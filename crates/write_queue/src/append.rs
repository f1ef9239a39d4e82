use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::WriteError;

/// Appends `content` to `path` as UTF-8, creating the file if needed.
///
/// The handle is opened and closed within the call, so each append owns the
/// file for its whole duration.
pub fn append_to_file(path: &Path, content: &str) -> Result<(), WriteError> {
    if path.as_os_str().is_empty() {
        return Err(WriteError::MissingPath);
    }
    if content.is_empty() {
        return Err(WriteError::EmptyContent);
    }

    let io_error = |source: std::io::Error| WriteError::Io { path: path.to_path_buf(), source };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)?;
    Ok(())
}
