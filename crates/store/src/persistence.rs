use crate::error::StoreError;
use core_types::OrderRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

/// Reads the persisted record array from disk.
///
/// A missing file is not an error: it returns `Ok(None)` so the caller can
/// fall back to generation. Anything else that goes wrong (unreadable file,
/// unparsable JSON, a record missing a field) is fatal.
pub fn read_records(path: &Path) -> Result<Option<Vec<OrderRecord>>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(Some(records))
}

/// Parses a JSON byte sequence in the portable record format.
///
/// This is the same deserializer `read_records` uses, exposed so exported
/// data can be fed back through it.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<OrderRecord>, StoreError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Writes the record array to disk as pretty-printed JSON.
pub fn write_records(path: &Path, records: &[OrderRecord]) -> Result<(), StoreError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    Ok(())
}
