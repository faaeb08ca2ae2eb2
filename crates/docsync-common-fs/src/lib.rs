//! File system utilities for docsync.

pub mod path;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use docsync_common_core::{Error, Result};

/// Default upper bound for Markdown documents read by the generators.
pub const MAX_DOCUMENT_SIZE: usize = 8 * 1024 * 1024;

fn read_error(path: &Path, e: io::Error) -> Error {
    let message = match e.kind() {
        io::ErrorKind::NotFound => format!("file not found: {}", path.display()),
        io::ErrorKind::PermissionDenied => format!("permission denied: {}", path.display()),
        _ => format!("failed to read file: {}", path.display()),
    };
    Error::file_system(message, path, e)
}

fn write_error(message: String, path: &Path, e: io::Error) -> Error {
    Error::file_system(message, path, e)
}

/// Read a file to string with size limit.
pub fn read_to_string(path: impl AsRef<Path>, max_size: usize) -> Result<String> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| read_error(path, e))?;

    if metadata.len() as usize > max_size {
        return Err(Error::FileSystem {
            message: format!("file too large: {} bytes (max: {})", metadata.len(), max_size),
            path: Some(path.to_string_lossy().to_string()),
            source: None,
        });
    }

    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;

    // Strip a UTF-8 BOM; anything that is not valid UTF-8 is decoded lossily.
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes[..]);
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Write to a file atomically (write to temp, then rename).
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    ensure_dir(parent)?;

    let mut temp_path = path.to_path_buf();
    if let Some(name) = path.file_name() {
        temp_path.set_file_name(format!(".{}.tmp", name.to_string_lossy()));
    } else {
        temp_path.push(".tmp");
    }

    {
        let mut file = File::create(&temp_path).map_err(|e| {
            write_error(
                format!("failed to create temporary file: {}", temp_path.display()),
                &temp_path,
                e,
            )
        })?;

        file.write_all(contents).map_err(|e| {
            write_error(
                format!("failed to write to temporary file: {}", temp_path.display()),
                &temp_path,
                e,
            )
        })?;

        file.sync_all().map_err(|e| {
            write_error(
                format!("failed to sync temporary file: {}", temp_path.display()),
                &temp_path,
                e,
            )
        })?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(
            format!("failed to rename temporary file to target: {}", path.display()),
            path,
            e,
        )
    })?;

    Ok(())
}

/// Write string to file atomically.
pub fn write_string_atomic(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    write_atomic(path, contents.as_bytes())
}

/// Ensure a directory exists (safe directory creation).
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            write_error(
                format!("failed to create directory: {}", path.display()),
                path,
                e,
            )
        })?;
    }
    Ok(())
}

/// Check if path is a file.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Check if path is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Count the entries (files and directories) directly inside `dir`.
pub fn count_entries(dir: impl AsRef<Path>) -> Result<usize> {
    let dir = dir.as_ref();
    let read_dir = fs::read_dir(dir).map_err(|e| {
        Error::file_system(format!("failed to read directory: {}", dir.display()), dir, e)
    })?;

    let mut count = 0;
    for entry in read_dir {
        entry.map_err(|e| {
            Error::file_system(
                format!("failed to read directory entry: {}", dir.display()),
                dir,
                e,
            )
        })?;
        count += 1;
    }

    Ok(count)
}
