//! Archive ingestors and the extension-based selector.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use flow_model::Table;

use crate::archive::{ArchiveFormat, extract_zip};
use crate::csv::{CsvOptions, read_csv_table};
use crate::discovery::locate_data_file;
use crate::error::{IngestError, Result};

/// Prefix of per-call extraction directories.
const EXTRACT_DIR_PREFIX: &str = "insightflow-extract-";

/// Options shared by all ingestors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Directory under which per-call extraction directories are created.
    /// Uses the system temp directory when `None`.
    pub extraction_root: Option<PathBuf>,
    /// CSV parsing options.
    pub csv: CsvOptions,
}

impl IngestOptions {
    /// Set the extraction root.
    #[must_use]
    pub fn with_extraction_root(mut self, root: Option<PathBuf>) -> Self {
        self.extraction_root = root;
        self
    }

    /// Set the CSV parsing options.
    #[must_use]
    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }
}

/// A request to ingest one archive.
#[derive(Debug, Clone)]
pub struct IngestRequest {
    /// Path to the archive.
    pub path: PathBuf,
    /// Expected archive format.
    pub format: ArchiveFormat,
    /// Ingestion options.
    pub options: IngestOptions,
}

impl IngestRequest {
    /// Request for a ZIP archive with default options.
    pub fn zip(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: ArchiveFormat::Zip,
            options: IngestOptions::default(),
        }
    }

    /// Request whose format is taken from the path's extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let extension = path_extension(&path);
        let format = ArchiveFormat::from_extension(&extension)
            .ok_or(IngestError::UnsupportedFormat { extension })?;
        Ok(Self {
            path,
            format,
            options: IngestOptions::default(),
        })
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: IngestOptions) -> Self {
        self.options = options;
        self
    }
}

/// Ingests a ZIP archive holding exactly one CSV file.
#[derive(Debug, Clone, Default)]
pub struct ZipCsvIngestor {
    options: IngestOptions,
}

impl ZipCsvIngestor {
    /// Create an ingestor with the given options.
    pub fn new(options: IngestOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    /// Extracts `path` into a fresh directory and loads its CSV file.
    ///
    /// Checks run in order: the file exists, it has a `.zip` extension, it
    /// extracts, and the extraction holds exactly one CSV file. The
    /// extraction directory is removed before returning, on success or
    /// failure.
    pub fn ingest(&self, path: &Path) -> Result<Table> {
        if !path.is_file() {
            return Err(IngestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if !ArchiveFormat::Zip.matches_path(path) {
            return Err(IngestError::UnsupportedFormat {
                extension: path_extension(path),
            });
        }

        let extract_dir = create_extraction_dir(self.options.extraction_root.as_deref())?;
        tracing::debug!(
            archive = %path.display(),
            dir = %extract_dir.path().display(),
            "Created extraction directory"
        );

        extract_zip(path, extract_dir.path())?;
        let data_file = locate_data_file(extract_dir.path())?;
        let table = read_csv_table(&data_file, &self.options.csv)?;

        tracing::info!(
            archive = %path.display(),
            file = %data_file.file_name().unwrap_or_default().to_string_lossy(),
            rows = table.row_count(),
            columns = table.column_count(),
            "Ingested archive"
        );
        Ok(table)
    }
}

/// Concrete ingestors, selected by archive format.
#[derive(Debug, Clone)]
pub enum Ingestor {
    /// ZIP archive with one CSV member.
    ZipCsv(ZipCsvIngestor),
}

impl Ingestor {
    /// Ingestor for a known format.
    pub fn for_format(format: ArchiveFormat, options: IngestOptions) -> Self {
        match format {
            ArchiveFormat::Zip => Self::ZipCsv(ZipCsvIngestor::new(options)),
        }
    }

    /// Format handled by this ingestor.
    pub fn format(&self) -> ArchiveFormat {
        match self {
            Self::ZipCsv(_) => ArchiveFormat::Zip,
        }
    }

    /// Ingest an archive into a table.
    pub fn ingest(&self, path: &Path) -> Result<Table> {
        match self {
            Self::ZipCsv(ingestor) => ingestor.ingest(path),
        }
    }
}

/// Selects an ingestor by file extension (`".zip"`).
///
/// Unknown extensions fail with [`IngestError::UnsupportedFormat`].
pub fn ingestor_for_extension(extension: &str, options: IngestOptions) -> Result<Ingestor> {
    let format =
        ArchiveFormat::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFormat {
            extension: extension.to_string(),
        })?;
    Ok(Ingestor::for_format(format, options))
}

/// Runs a request through the ingestor for its format.
pub fn ingest(request: IngestRequest) -> Result<Table> {
    let IngestRequest {
        path,
        format,
        options,
    } = request;
    Ingestor::for_format(format, options).ingest(&path)
}

fn create_extraction_dir(root: Option<&Path>) -> Result<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(EXTRACT_DIR_PREFIX);
    match root {
        Some(root) => {
            std::fs::create_dir_all(root).map_err(|e| IngestError::ExtractionDir {
                path: root.to_path_buf(),
                source: e,
            })?;
            builder
                .tempdir_in(root)
                .map_err(|e| IngestError::ExtractionDir {
                    path: root.to_path_buf(),
                    source: e,
                })
        }
        None => builder.tempdir().map_err(|e| IngestError::ExtractionDir {
            path: std::env::temp_dir(),
            source: e,
        }),
    }
}

fn path_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
