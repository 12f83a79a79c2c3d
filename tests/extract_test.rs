//! Tests for the topology source extractor

use std::io::Write;

use tempfile::NamedTempFile;

use cputree::extract;
use cputree::{LevelSchema, TopoError};

#[ctor::ctor]
fn init() {
    cputree::util::testing::init_test_setup();
}

fn source_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp source");
    file.write_all(content.as_bytes()).expect("write source");
    file
}

#[test]
fn given_cpuinfo_file_when_scanning_then_only_level_lines_survive() {
    // Arrange
    let file = source_file(
        "processor\t: 0\n\
         vendor_id\t: ExampleVendor\n\
         model name\t: Example CPU @ 2.00GHz\n\
         physical id\t: 0\n\
         core id\t\t: 0\n\
         cache size\t: 512 KB\n",
    );

    // Act
    let pairs = extract::scan_file(file.path(), &LevelSchema::cpu()).unwrap();

    // Assert
    assert_eq!(
        pairs,
        vec![
            ("processor".to_string(), 0),
            ("physical id".to_string(), 0),
            ("core id".to_string(), 0),
        ]
    );
}

#[test]
fn given_missing_file_when_scanning_then_source_unavailable() {
    // Act
    let result = extract::scan_file(
        std::path::Path::new("/nonexistent/cpuinfo"),
        &LevelSchema::cpu(),
    );

    // Assert
    assert!(matches!(result, Err(TopoError::SourceUnavailable { .. })));
}

#[test]
fn given_unparseable_value_when_scanning_then_malformed_value() {
    // Arrange
    let file = source_file("processor: zero\n");

    // Act
    let result = extract::scan_file(file.path(), &LevelSchema::cpu());

    // Assert
    assert!(matches!(result, Err(TopoError::MalformedValue { .. })));
}
