//! Path and directory management.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, UserDirs};

use crate::error::Result;

/// The platform download folder, or `~/Downloads` when the platform has none.
pub fn default_download_dir() -> PathBuf {
    if let Some(dir) = UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
    {
        return dir;
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join("Downloads"))
        .unwrap_or_else(|| PathBuf::from("Downloads"))
}

/// Resolve a user-entered directory, treating blank input as the default.
pub fn resolve_directory(input: Option<&Path>) -> PathBuf {
    match input {
        Some(dir) if !dir.to_string_lossy().trim().is_empty() => dir.to_path_buf(),
        _ => default_download_dir(),
    }
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_directory_explicit() {
        assert_eq!(
            resolve_directory(Some(Path::new("/data/insta"))),
            PathBuf::from("/data/insta")
        );
    }

    #[test]
    fn test_resolve_directory_blank() {
        assert_eq!(resolve_directory(None), default_download_dir());
        assert_eq!(resolve_directory(Some(Path::new(""))), default_download_dir());
        assert_eq!(resolve_directory(Some(Path::new("  "))), default_download_dir());
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_nested() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).await.unwrap();
    }
}
