//! End-to-end tests for archive ingestion.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flow_ingest::{
    IngestError, IngestOptions, IngestRequest, ZipCsvIngestor, ingest, ingestor_for_extension,
};
use flow_model::ColumnKind;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn write_zip(dir: &Path, name: &str, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create archive");
    let mut writer = zip::ZipWriter::new(file);
    for (member, contents) in members {
        writer
            .start_file(*member, SimpleFileOptions::default())
            .expect("start member");
        writer.write_all(contents.as_bytes()).expect("write member");
    }
    writer.finish().expect("finish archive");
    path
}

fn options_in(root: &Path) -> IngestOptions {
    IngestOptions::default().with_extraction_root(Some(root.join("extracted_data")))
}

#[test]
fn ingests_single_csv_archive() {
    let dir = TempDir::new().unwrap();
    let archive = write_zip(
        dir.path(),
        "archive.zip",
        &[(
            "AmesHousing.csv",
            "Order,Lot Frontage,MS Zoning,SalePrice\n1,141,RL,215000\n2,,RH,105000\n3,81,NA,172000\n",
        )],
    );

    let ingestor = ingestor_for_extension(".zip", options_in(dir.path())).unwrap();
    let table = ingestor.ingest(&archive).unwrap();

    assert_eq!(
        table.column_names(),
        vec!["Order", "Lot Frontage", "MS Zoning", "SalePrice"]
    );
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_kind("Lot Frontage").unwrap(), ColumnKind::Integer);
    assert_eq!(table.column_kind("MS Zoning").unwrap(), ColumnKind::Text);
    assert_eq!(table.missing_count("Lot Frontage").unwrap(), 1);
    assert_eq!(table.missing_count("MS Zoning").unwrap(), 1);
}

#[test]
fn extraction_directory_is_removed_after_ingest() {
    let dir = TempDir::new().unwrap();
    let archive = write_zip(dir.path(), "archive.zip", &[("data.csv", "A\n1\n")]);
    let root = dir.path().join("extracted_data");

    let ingestor = ZipCsvIngestor::new(options_in(dir.path()));
    ingestor.ingest(&archive).unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(&root).unwrap().collect();
    assert!(leftovers.is_empty(), "extraction root should be empty");
}

#[test]
fn extraction_directory_is_removed_after_failure() {
    let dir = TempDir::new().unwrap();
    let archive = write_zip(
        dir.path(),
        "archive.zip",
        &[("train.csv", "A\n1\n"), ("test.csv", "A\n2\n")],
    );
    let root = dir.path().join("extracted_data");

    let result = ZipCsvIngestor::new(options_in(dir.path())).ingest(&archive);
    assert!(result.is_err());

    let leftovers: Vec<_> = std::fs::read_dir(&root).unwrap().collect();
    assert!(leftovers.is_empty(), "extraction root should be empty");
}

#[test]
fn repeated_ingestions_do_not_see_each_other() {
    let dir = TempDir::new().unwrap();
    let first = write_zip(dir.path(), "first.zip", &[("first.csv", "A\n1\n")]);
    let second = write_zip(dir.path(), "second.zip", &[("second.csv", "B\n2\n2\n")]);

    let ingestor = ZipCsvIngestor::new(options_in(dir.path()));
    let a = ingestor.ingest(&first).unwrap();
    let b = ingestor.ingest(&second).unwrap();

    assert_eq!(a.column_names(), vec!["A"]);
    assert_eq!(b.column_names(), vec!["B"]);
    assert_eq!(b.row_count(), 2);
}

#[test]
fn two_csv_members_are_ambiguous() {
    let dir = TempDir::new().unwrap();
    let archive = write_zip(
        dir.path(),
        "archive.zip",
        &[("train.csv", "A\n1\n"), ("test.csv", "A\n2\n")],
    );

    let result = ZipCsvIngestor::new(options_in(dir.path())).ingest(&archive);
    assert!(matches!(result, Err(IngestError::AmbiguousDataFile { .. })));
}

#[test]
fn archive_without_csv_has_no_data_file() {
    let dir = TempDir::new().unwrap();
    let archive = write_zip(dir.path(), "archive.zip", &[("readme.txt", "nothing here")]);

    let result = ZipCsvIngestor::new(options_in(dir.path())).ingest(&archive);
    assert!(matches!(result, Err(IngestError::NoDataFile { .. })));
}

#[test]
fn nonexistent_path_is_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.zip");

    let result = ZipCsvIngestor::default().ingest(&missing);
    assert!(matches!(result, Err(IngestError::NotFound { .. })));
}

#[test]
fn not_found_is_checked_before_extension() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.tar");

    let result = ZipCsvIngestor::default().ingest(&missing);
    assert!(matches!(result, Err(IngestError::NotFound { .. })));
}

#[test]
fn existing_tar_file_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let tar = dir.path().join("archive.tar");
    std::fs::write(&tar, b"not really a tarball").unwrap();

    let result = ZipCsvIngestor::default().ingest(&tar);
    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn tar_extension_rejected_by_selector() {
    let result = ingestor_for_extension(".tar", IngestOptions::default());
    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn request_based_ingest() {
    let dir = TempDir::new().unwrap();
    let archive = write_zip(dir.path(), "archive.zip", &[("data.csv", "A,B\n1,x\n")]);

    let request = IngestRequest::zip(&archive).with_options(options_in(dir.path()));
    let table = ingest(request).unwrap();
    assert_eq!(table.row_count(), 1);
}

#[test]
fn unlabelled_index_column_is_ingested() {
    let dir = TempDir::new().unwrap();
    let archive = write_zip(
        dir.path(),
        "archive.zip",
        &[("data.csv", ",A,B\n0,1,\n1,,2\n2,3,3\n")],
    );

    let table = ZipCsvIngestor::new(options_in(dir.path()))
        .ingest(&archive)
        .unwrap();

    assert_eq!(table.column_names(), vec!["Unnamed: 0", "A", "B"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.missing_count("Unnamed: 0").unwrap(), 0);
    assert_eq!(table.missing_count("A").unwrap(), 1);
}
