//! Downloads directory listing.
//!
//! The portal's raw `/files/` view is generated from a directory on disk:
//! an ordered sequence of `(name, size, modified-time, relative-url)`, sorted
//! case-insensitively by name, with hidden entries and non-regular files
//! excluded.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{PortalError, Result};

/// One downloadable file.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadEntry {
    /// File name as it appears in the listing.
    pub name: String,

    /// Size in bytes.
    pub size: u64,

    /// Last-modified time.
    pub modified: DateTime<Local>,

    /// Relative URL the portal links to.
    pub url: String,
}

impl DownloadEntry {
    /// Size formatted for humans ("4.2 MB").
    pub fn human_size(&self) -> String {
        format_size(self.size)
    }
}

/// Scan a directory into an ordered download listing.
///
/// Hidden entries (leading dot) and anything that is not a regular file are
/// skipped. Entries whose metadata cannot be read are skipped rather than
/// failing the listing.
pub fn scan_directory(dir: &Path, base_url: &str) -> Result<Vec<DownloadEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| PortalError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut entries = Vec::new();
    for entry in read_dir.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };

        let modified = metadata
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH)
            .into();

        entries.push(DownloadEntry {
            url: join_url(base_url, &name),
            size: metadata.len(),
            modified,
            name,
        });
    }

    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(entries)
}

/// Join the base URL and a file name with exactly one slash between them.
fn join_url(base_url: &str, name: &str) -> String {
    if base_url.ends_with('/') {
        format!("{}{}", base_url, name)
    } else {
        format!("{}/{}", base_url, name)
    }
}

/// Format a byte count for humans.
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = "B";
    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, contents: &[u8]) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn listing_is_sorted_case_insensitively() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "sideband.apk", b"x");
        touch(dir.path(), "ATAK.apk", b"x");
        touch(dir.path(), "manual.pdf", b"x");

        let entries = scan_directory(dir.path(), "/files/").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["ATAK.apk", "manual.pdf", "sideband.apk"]);
    }

    #[test]
    fn hidden_entries_and_directories_are_excluded() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "visible.bin", b"x");
        touch(dir.path(), ".hidden", b"x");
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let entries = scan_directory(dir.path(), "/files/").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "visible.bin");
    }

    #[test]
    fn sizes_and_urls_are_reported() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "atak.apk", &[0u8; 2048]);

        let entries = scan_directory(dir.path(), "/files/").unwrap();
        assert_eq!(entries[0].size, 2048);
        assert_eq!(entries[0].url, "/files/atak.apk");
        assert_eq!(entries[0].human_size(), "2.0 KB");
    }

    #[test]
    fn base_url_without_trailing_slash_still_joins() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.bin", b"x");
        let entries = scan_directory(dir.path(), "/files").unwrap();
        assert_eq!(entries[0].url, "/files/a.bin");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let err = scan_directory(&missing, "/files/").unwrap_err();
        assert!(matches!(err, PortalError::DirectoryUnreadable { .. }));
    }

    #[test]
    fn empty_directory_yields_empty_listing() {
        let dir = TempDir::new().unwrap();
        assert!(scan_directory(dir.path(), "/files/").unwrap().is_empty());
    }

    #[test]
    fn format_size_covers_magnitudes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn entries_serialize_for_the_portal() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "atak.apk", b"data");
        let entries = scan_directory(dir.path(), "/files/").unwrap();
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0]["name"], "atak.apk");
        assert_eq!(json[0]["size"], 4);
        assert_eq!(json[0]["url"], "/files/atak.apk");
        assert!(json[0]["modified"].is_string());
    }
}
