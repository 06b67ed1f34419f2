use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize the filtered view: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write the export file: {0}")]
    Io(#[from] std::io::Error),
}
