//! JSON file helpers with atomic writes

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::LedgerError;

/// A stored record that failed to load
///
/// The raw JSON is kept so the next save writes it back untouched.
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    pub raw: Value,
    pub error: LedgerError,
}

impl RejectedRecord {
    /// The record's `name` field, if it has one
    pub fn name(&self) -> Option<&str> {
        self.raw.get("name").and_then(Value::as_str)
    }

    /// A string field of the raw record
    pub fn field(&self, field: &str) -> Option<&str> {
        self.raw.get(field).and_then(Value::as_str)
    }
}

/// Records read from one file: the ones that loaded and the ones that didn't
#[derive(Debug)]
pub struct LoadedRecords<T> {
    pub records: Vec<T>,
    pub rejected: Vec<RejectedRecord>,
}

/// Parse a string field of a raw record with the enum's `FromStr`
///
/// Returns the `InvalidEnumValue` error when the field holds a value outside
/// the enum, and `None` when it is absent or parses.
pub fn check_enum_field<E>(raw: &Value, field: &str) -> Option<LedgerError>
where
    E: std::str::FromStr<Err = LedgerError>,
{
    raw.get(field)
        .and_then(Value::as_str)
        .and_then(|value| value.parse::<E>().err())
}

/// Read JSON from `path`, or `T::default()` if the file doesn't exist yet
pub fn read_json<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LedgerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read the array stored under `key` one record at a time
///
/// A missing file yields no records. A record that fails to deserialize or
/// to validate is set aside instead of failing the whole file; `diagnose`
/// names the offending field when it can.
pub fn read_records<T, P>(
    path: P,
    key: &str,
    diagnose: impl Fn(&Value) -> Option<LedgerError>,
    validate: impl Fn(&T) -> Result<(), LedgerError>,
) -> Result<LoadedRecords<T>, LedgerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut file_data: Map<String, Value> = read_json(path)?;

    let raw_records = match file_data.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(LedgerError::Storage(format!(
                "Failed to parse {}: '{}' is not a list",
                path.display(),
                key
            )))
        }
    };

    let mut loaded = LoadedRecords {
        records: Vec::with_capacity(raw_records.len()),
        rejected: Vec::new(),
    };

    for raw in raw_records {
        let result = match serde_json::from_value::<T>(raw.clone()) {
            Ok(record) => validate(&record).map(|_| record),
            Err(e) => Err(diagnose(&raw).unwrap_or_else(|| {
                LedgerError::Storage(format!("Malformed record in {}: {}", path.display(), e))
            })),
        };

        match result {
            Ok(record) => loaded.records.push(record),
            Err(error) => loaded.rejected.push(RejectedRecord { raw, error }),
        }
    }

    Ok(loaded)
}

/// Write `records` under `key`, followed by any rejected raw records
pub fn write_records<T, P>(
    path: P,
    key: &str,
    records: &[T],
    rejected: &[RejectedRecord],
) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let mut items = Vec::with_capacity(records.len() + rejected.len());
    for record in records {
        items.push(
            serde_json::to_value(record)
                .map_err(|e| LedgerError::Storage(format!("Failed to serialize data: {}", e)))?,
        );
    }
    items.extend(rejected.iter().map(|r| r.raw.clone()));

    let mut file_data = Map::new();
    file_data.insert(key.to_string(), Value::Array(items));
    write_json_atomic(path, &file_data)
}

/// Write JSON to `path` through a temp file and rename
///
/// Readers see either the previous file or the complete new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // must live in the same directory for rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })
}
