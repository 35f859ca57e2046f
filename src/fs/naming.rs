//! Filename generation and manipulation.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix appended to files while their bytes are still arriving.
pub const PARTIAL_SUFFIX: &str = "part";

/// Validate and sanitize a single filename component.
///
/// Returns an error if the name contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Build `{author}_{post_id}.{extension}`.
pub fn post_file_name(author: &str, post_id: &str, extension: &str) -> Result<String> {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        return Err(Error::InvalidFilename(
            "File extension cannot be empty".to_string(),
        ));
    }

    sanitize_filename(&format!("{}_{}.{}", author, post_id, extension))
}

/// Sibling path used while a download is in flight (`name.ext.part`).
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(PARTIAL_SUFFIX);
    path.with_file_name(name)
}
