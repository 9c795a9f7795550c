//! Error types for archive ingestion.

use std::path::PathBuf;

use flow_model::TableError;
use thiserror::Error;

/// Errors that can occur while ingesting an archive into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Request Validation ===
    /// Input path does not reference an existing file.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// No ingestor handles this extension.
    #[error("unsupported archive format '{extension}' (supported: .zip)")]
    UnsupportedFormat { extension: String },

    // === Extraction ===
    /// Failed to create the extraction directory.
    #[error("failed to create extraction directory under {path}: {source}")]
    ExtractionDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive could not be opened or extracted.
    #[error("failed to extract archive {path}: {message}")]
    Archive { path: PathBuf, message: String },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Data File Location ===
    /// Archive held no CSV file.
    #[error("no CSV file found in extracted archive ({dir})")]
    NoDataFile { dir: PathBuf },

    /// Archive held more than one CSV file.
    #[error("multiple CSV files found in extracted archive: {}", display_names(.files))]
    AmbiguousDataFile { dir: PathBuf, files: Vec<PathBuf> },

    // === CSV Parsing ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// CSV file has no content.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Parsed data does not form a valid table.
    #[error(transparent)]
    Table(#[from] TableError),
}

fn display_names(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::NotFound {
            path: PathBuf::from("/data/archive.zip"),
        };
        assert_eq!(err.to_string(), "file not found: /data/archive.zip");
    }

    #[test]
    fn test_ambiguous_lists_file_names() {
        let err = IngestError::AmbiguousDataFile {
            dir: PathBuf::from("/tmp/x"),
            files: vec![PathBuf::from("/tmp/x/a.csv"), PathBuf::from("/tmp/x/b.csv")],
        };
        assert_eq!(
            err.to_string(),
            "multiple CSV files found in extracted archive: a.csv, b.csv"
        );
    }

    #[test]
    fn test_error_from_table() {
        let table_err = TableError::DuplicateColumn {
            name: "Id".to_string(),
        };
        let ingest_err: IngestError = table_err.into();
        assert!(matches!(ingest_err, IngestError::Table(_)));
    }
}
