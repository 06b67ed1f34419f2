use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid aggregation parameter: {0}")]
    InvalidParameter(String),
}
