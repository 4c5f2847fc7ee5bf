//! Mapping files and record input streams.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use anyhow::Context;
use serde_json::Value as JsonValue;

use rowmap_model::{ExternalRecord, Mapping};

/// Load a typed mapping from a JSON file (a list of field descriptors).
///
/// Validation runs during deserialization, so a mapping that loads is
/// guaranteed to be a bijection between internal and external names.
pub fn load_mapping(path: &Path) -> anyhow::Result<Mapping> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read mapping file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid mapping file {}", path.display()))
}

/// Open the record input: a file when a path is given, stdin otherwise.
pub fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Stream external records from JSON Lines input. Blank lines are skipped.
pub fn json_records(
    reader: impl BufRead,
) -> impl Iterator<Item = anyhow::Result<ExternalRecord>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_no = index + 1;
            match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(
                    serde_json::from_str(&line)
                        .with_context(|| format!("invalid record on line {line_no}")),
                ),
                Err(error) => {
                    Some(Err(error).with_context(|| format!("failed to read line {line_no}")))
                }
            }
        })
}

/// Stream external records from CSV input.
///
/// The header row supplies the external keys; every non-empty cell enters
/// the record as a JSON string and flows through the same coercion kernel
/// as JSON input. Empty cells are treated as absent keys.
pub fn csv_records(
    reader: impl Read,
) -> anyhow::Result<impl Iterator<Item = anyhow::Result<ExternalRecord>>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("failed to read CSV header row")?
        .clone();
    Ok(csv_reader.into_records().enumerate().map(move |(index, row)| {
        let row = row.with_context(|| format!("failed to read CSV record {}", index + 1))?;
        let mut record = ExternalRecord::new();
        for (key, cell) in headers.iter().zip(row.iter()) {
            if !cell.is_empty() {
                record.insert(key, JsonValue::String(cell.to_string()));
            }
        }
        Ok(record)
    }))
}
