use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access the persisted store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("The persisted store file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Generated an invalid record: {0}")]
    InvalidRecord(#[from] core_types::CoreError),
}
