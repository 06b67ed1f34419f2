use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data: DataSettings,
    pub generator: GeneratorSettings,
}

/// Where the persisted sales data lives on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Path to the persisted JSON file. Read at startup; written once if absent.
    pub path: PathBuf,
}

/// Parameters for the deterministic sample-data generator.
///
/// These only take effect on a first run, when no persisted file exists yet.
/// Subsequent runs reuse the persisted dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    /// Seed for the pseudo-random generator. The same seed and parameters
    /// always produce the same dataset.
    pub seed: u64,
    /// How many order records to synthesize.
    pub record_count: usize,
    /// The span of order dates, in days, ending today.
    pub day_span: i64,
}
