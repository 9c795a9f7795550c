//! Archive ingestion for the InsightFlow pipeline.
//!
//! Turns a compressed archive into a [`flow_model::Table`]:
//!
//! 1. validate the path (exists, expected extension)
//! 2. extract every member into a fresh per-call directory
//! 3. require exactly one CSV file among the extracted members
//! 4. parse it (header row, comma separated, UTF-8)
//!
//! The extraction directory is a [`tempfile::TempDir`] and is removed when
//! ingestion returns, so concurrent ingestions never share files.
//!
//! # Example
//!
//! ```ignore
//! use flow_ingest::{IngestOptions, ingestor_for_extension};
//!
//! let ingestor = ingestor_for_extension(".zip", IngestOptions::default())?;
//! let table = ingestor.ingest(std::path::Path::new("data/archive.zip"))?;
//! println!("{} rows", table.row_count());
//! ```

mod archive;
mod csv;
mod discovery;
mod error;
mod ingestor;

// === Error Types ===
pub use error::{IngestError, Result};

// === Archives ===
pub use archive::{ArchiveFormat, extract_zip};

// === CSV Reading ===
pub use csv::{CsvOptions, DEFAULT_NULL_VALUES, read_csv_table, validate_encoding};

// === Data File Discovery ===
pub use discovery::{DATA_FILE_EXTENSIONS, list_data_files, locate_data_file};

// === Ingestors ===
pub use ingestor::{
    IngestOptions, IngestRequest, Ingestor, ZipCsvIngestor, ingest, ingestor_for_extension,
};
