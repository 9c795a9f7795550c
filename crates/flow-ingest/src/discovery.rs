//! Locating the data file inside an extraction directory.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// File extensions treated as tabular data.
pub const DATA_FILE_EXTENSIONS: &[&str] = &["csv"];

/// Lists the data files at the top level of `dir`.
///
/// Matching is case-insensitive on the extension. Returns files sorted by
/// file name.
pub fn list_data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_file() && is_data_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Returns the single data file in `dir`.
///
/// Zero candidates is [`IngestError::NoDataFile`]; more than one is
/// [`IngestError::AmbiguousDataFile`]. No attempt is made to pick one.
pub fn locate_data_file(dir: &Path) -> Result<PathBuf> {
    let mut files = list_data_files(dir)?;
    match files.len() {
        0 => Err(IngestError::NoDataFile {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(files.remove(0)),
        _ => Err(IngestError::AmbiguousDataFile {
            dir: dir.to_path_buf(),
            files,
        }),
    }
}

fn is_data_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DATA_FILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "A\n1\n").unwrap();
    }

    #[test]
    fn test_list_data_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "train.csv");
        touch(dir.path(), "AmesHousing.CSV");
        touch(dir.path(), "readme.txt");
        std::fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = list_data_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["AmesHousing.CSV", "train.csv"]);
    }

    #[test]
    fn test_locate_single_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "AmesHousing.csv");
        touch(dir.path(), "notes.md");

        let file = locate_data_file(dir.path()).unwrap();
        assert!(file.ends_with("AmesHousing.csv"));
    }

    #[test]
    fn test_locate_no_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "notes.md");

        let result = locate_data_file(dir.path());
        assert!(matches!(result, Err(IngestError::NoDataFile { .. })));
    }

    #[test]
    fn test_locate_ambiguous() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "train.csv");
        touch(dir.path(), "test.csv");

        match locate_data_file(dir.path()) {
            Err(IngestError::AmbiguousDataFile { files, .. }) => assert_eq!(files.len(), 2),
            other => panic!("expected ambiguous data file, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = list_data_files(&dir.path().join("absent"));
        assert!(matches!(result, Err(IngestError::DirectoryRead { .. })));
    }
}
