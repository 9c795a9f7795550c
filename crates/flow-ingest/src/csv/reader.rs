//! CSV file reading into a [`Table`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use flow_model::Table;

use crate::error::{IngestError, Result};

/// Cell tokens read as missing in addition to empty fields.
pub const DEFAULT_NULL_VALUES: &[&str] = &["NA", "N/A", "NaN", "null"];

/// Options for parsing the extracted CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Tokens treated as missing cells (empty fields are always missing).
    pub null_values: Vec<String>,
    /// Rows scanned for type inference; `None` scans the whole file.
    pub infer_schema_rows: Option<usize>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| (*s).to_string()).collect(),
            infer_schema_rows: None,
        }
    }
}

impl CsvOptions {
    /// Replace the missing-value tokens.
    #[must_use]
    pub fn with_null_values(mut self, values: Vec<String>) -> Self {
        self.null_values = values;
        self
    }

    /// Limit schema inference to the first `rows` rows.
    #[must_use]
    pub fn with_infer_schema_rows(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_rows = rows;
        self
    }
}

/// Rejects UTF-16 encoded files.
///
/// A UTF-8 BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Reads a CSV file into a [`Table`].
///
/// The first row holds the column names, fields are comma separated and the
/// file is UTF-8. Empty fields and the configured null tokens become missing
/// cells.
pub fn read_csv_table(path: &Path, options: &CsvOptions) -> Result<Table> {
    validate_encoding(path)?;

    let null_values = if options.null_values.is_empty() {
        None
    } else {
        Some(NullValues::AllColumns(
            options
                .null_values
                .iter()
                .map(|token| PlSmallStr::from(token.as_str()))
                .collect(),
        ))
    };
    let parse_options = CsvParseOptions::default().with_null_values(null_values);

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_rows)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let df = name_blank_columns(df, path)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Parsed CSV"
    );

    Ok(Table::new(df)?)
}

/// Names blank header fields `Unnamed: {index}`, as written by exporters
/// that store the row index without a label.
fn name_blank_columns(mut df: DataFrame, path: &Path) -> Result<DataFrame> {
    let names = df.get_column_names_owned();
    if !names.iter().any(|name| name.trim().is_empty()) {
        return Ok(df);
    }
    let renamed: Vec<PlSmallStr> = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            if name.trim().is_empty() {
                tracing::debug!(index, "Naming blank CSV header");
                format!("Unnamed: {index}").into()
            } else {
                name
            }
        })
        .collect();
    df.set_column_names(renamed)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(df)
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_model::ColumnKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_infers_types_and_missing() {
        let file = create_temp_csv(b"A,B,Zone\n1,,RL\n,2,\n3,3,RM\n");
        let table = read_csv_table(file.path(), &CsvOptions::default()).unwrap();

        assert_eq!(table.column_names(), vec!["A", "B", "Zone"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_kind("A").unwrap(), ColumnKind::Integer);
        assert_eq!(table.column_kind("Zone").unwrap(), ColumnKind::Text);
        assert_eq!(table.missing_count("A").unwrap(), 1);
        assert_eq!(table.missing_count("B").unwrap(), 1);
        assert_eq!(table.missing_count("Zone").unwrap(), 1);
    }

    #[test]
    fn test_read_csv_table_null_tokens() {
        let file = create_temp_csv(b"Id,Alley\n1,NA\n2,Grvl\n3,Pave\n");
        let table = read_csv_table(file.path(), &CsvOptions::default()).unwrap();
        assert_eq!(table.missing_count("Alley").unwrap(), 1);

        let keep_na = CsvOptions::default().with_null_values(Vec::new());
        let table = read_csv_table(file.path(), &keep_na).unwrap();
        assert_eq!(table.missing_count("Alley").unwrap(), 0);
    }

    #[test]
    fn test_read_csv_table_with_utf8_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n".as_bytes());
        let table = read_csv_table(file.path(), &CsvOptions::default()).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_blank_header_named_by_position() {
        let file = create_temp_csv(b",A,B\n0,1,\n1,,2\n2,3,3\n");
        let table = read_csv_table(file.path(), &CsvOptions::default()).unwrap();
        assert_eq!(table.column_names(), vec!["Unnamed: 0", "A", "B"]);
        assert_eq!(table.column_kind("Unnamed: 0").unwrap(), ColumnKind::Integer);
        assert_eq!(table.total_missing(), 2);
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = create_temp_csv(b"");
        let result = read_csv_table(file.path(), &CsvOptions::default());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_utf16_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/data.csv"), &CsvOptions::default());
        assert!(matches!(result, Err(IngestError::NotFound { .. })));
    }
}
