//! Async file utilities for the Folio crates.
//!
//! Provides the discovery and reading operations used to enumerate raw
//! content sources. Discovery returns entries sorted by relative path so
//! the load order of a collection is stable across reloads and host
//! platforms.

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// Information about a discovered source file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// Storage name (filename including extension).
    pub name: String,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

/// Find all files with the given extension under a directory.
///
/// A missing base directory yields an empty list rather than an error;
/// a content collection with no root is simply empty.
///
/// # Example
///
/// ```no_run
/// # use folio_core::util::files::find_all_files;
/// # use std::path::Path;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let sources = find_all_files(Path::new("content"), "md").await?;
/// # Ok(())
/// # }
/// ```
pub async fn find_all_files(base_path: &Path, extension: &str) -> Result<Vec<FileInfo>> {
    if !exists(base_path).await {
        log::debug!("content root {} does not exist", base_path.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let mut walker = WalkDir::new(base_path);

    while let Some(entry_result) = walker.next().await {
        let entry = entry_result.map_err(|e| Error::Io(std::io::Error::other(e)))?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();

        files.push(FileInfo {
            path: path.to_path_buf(),
            name,
            relative_path,
        });
    }

    // Directory iteration order is platform-dependent; sort for a stable
    // discovery order.
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_find_all_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.md"), "# One").await.unwrap();
        fs::write(temp.path().join("two.md"), "# Two").await.unwrap();
        fs::write(temp.path().join("skip.txt"), "skip").await.unwrap();

        let files = find_all_files(temp.path(), "md").await.unwrap();

        assert_eq!(files.len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_files_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zeta.md"), "z").await.unwrap();
        fs::write(temp.path().join("alpha.md"), "a").await.unwrap();
        fs::write(temp.path().join("mid.md"), "m").await.unwrap();

        let files = find_all_files(temp.path(), "md").await.unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["alpha.md", "mid.md", "zeta.md"]);
    }

    #[tokio::test]
    async fn test_find_all_files_nested() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("root.md"), "root").await.unwrap();

        let subdir = temp.path().join("subdir");
        fs::create_dir(&subdir).await.unwrap();
        fs::write(subdir.join("nested.md"), "nested").await.unwrap();

        let files = find_all_files(temp.path(), "md").await.unwrap();

        assert_eq!(files.len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_files_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let files = find_all_files(&missing, "md").await.unwrap();

        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_files_file_info() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test-file.md");
        fs::write(&file_path, "content").await.unwrap();

        let files = find_all_files(temp.path(), "md").await.unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "test-file.md");
        assert_eq!(files[0].relative_path, PathBuf::from("test-file.md"));
    }

    #[tokio::test]
    async fn test_read_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.md");
        let content = "# Test Content";
        fs::write(&file_path, content).await.unwrap();

        let read_content = read_file(&file_path).await.unwrap();

        assert_eq!(read_content, content);
    }

    #[tokio::test]
    async fn test_read_file_not_found() {
        let temp = TempDir::new().unwrap();
        let nonexistent = temp.path().join("nonexistent.md");

        let result = read_file(&nonexistent).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nonexistent.md"));
    }

    #[tokio::test]
    async fn test_exists() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("exists.md");
        fs::write(&file_path, "content").await.unwrap();

        assert!(exists(&file_path).await);
        assert!(!exists(&temp.path().join("nonexistent.md")).await);
    }
}
