//! Scans a line-oriented key:value source for topology level lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::errors::{TopoError, TopoResult};
use crate::levels::LevelSchema;

/// Scan a reader for lines starting with a schema level name and return the
/// (level, value) pairs in source order.
///
/// A matching line is split at its first `:`; the trimmed remainder must
/// parse as an integer.
#[instrument(level = "debug", skip(reader, schema))]
pub fn scan<R: BufRead>(reader: R, schema: &LevelSchema) -> TopoResult<Vec<(String, i64)>> {
    let filter = schema.filter();
    let mut pairs = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !filter.is_match(&line) {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| TopoError::MalformedValue { line: line.clone() })?;
        let value: i64 = value
            .trim()
            .parse()
            .map_err(|_| TopoError::MalformedValue { line: line.clone() })?;
        pairs.push((key.trim().to_string(), value));
    }

    debug!("extracted {} topology pairs", pairs.len());
    Ok(pairs)
}

/// Open `path` and scan it. Open failures map to [`TopoError::SourceUnavailable`].
#[instrument(level = "debug", skip(schema))]
pub fn scan_file(path: &Path, schema: &LevelSchema) -> TopoResult<Vec<(String, i64)>> {
    let file = File::open(path).map_err(|source| TopoError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    scan(BufReader::new(file), schema)
}
