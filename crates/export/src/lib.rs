//! # Export Formatter
//!
//! Serializes a filtered view into the portable record format: a JSON array
//! of order objects with ISO-8601 (`YYYY-MM-DD`) date strings. This is the
//! same schema the store persists, so exported data can be fed straight back
//! through the store's deserializer without losing a field.

pub mod error;

pub use error::ExportError;

use analytics::FilteredView;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serializes the view's records as a portable JSON byte sequence.
pub fn to_portable_json(view: &FilteredView) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec(view.records())?)
}

/// Writes the view to disk in the portable format. This backs the
/// user-triggered "download filtered data" action.
pub fn write_portable_json(path: &Path, view: &FilteredView) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, view.records())?;

    tracing::info!(
        count = view.len(),
        path = %path.display(),
        "Exported filtered records"
    );
    Ok(())
}
