//! Archive formats and extraction.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Supported archive container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    /// ZIP archive.
    Zip,
}

impl ArchiveFormat {
    /// Looks up a format by file extension.
    ///
    /// Accepts the extension with or without the leading dot, in any case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.trim().trim_start_matches('.');
        if ext.eq_ignore_ascii_case("zip") {
            Some(Self::Zip)
        } else {
            None
        }
    }

    /// Extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
        }
    }

    /// True if `path` carries this format's extension.
    pub fn matches_path(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension()))
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// Extracts every member of a ZIP archive into `dest`.
///
/// Members with the same name overwrite each other in archive order. Entry
/// paths that would escape `dest` are rejected by the zip reader.
///
/// Returns the number of archive members.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<usize> {
    tracing::debug!(archive = %archive_path.display(), "Extracting from ZIP archive");

    let file = File::open(archive_path).map_err(|e| IngestError::Archive {
        path: archive_path.to_path_buf(),
        message: format!("failed to open archive: {e}"),
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|e| IngestError::Archive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;
    let members = archive.len();

    archive.extract(dest).map_err(|e| IngestError::Archive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        archive = %archive_path.display(),
        dest = %dest.display(),
        members,
        "Extracted archive"
    );
    Ok(members)
}
