use crate::error::ConfigError;
use crate::settings::Settings;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DataSettings, GeneratorSettings};

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. It reads an
/// optional `config.toml` next to the binary, layers it over the coded
/// defaults, and deserializes the result into our strongly-typed `Settings`
/// struct. The defaults match the original dataset: 1200 records over 180
/// days, seed 42, persisted to `sales_report.json`.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("data.path", "sales_report.json")?
        .set_default("generator.seed", 42)?
        .set_default("generator.record_count", 1200)?
        .set_default("generator.day_span", 180)?
        // The config file is optional; the defaults above cover a bare run.
        .add_source(config::File::with_name("config.toml").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;

    if settings.generator.record_count == 0 {
        return Err(ConfigError::ValidationError(
            "generator.record_count must be at least 1".to_string(),
        ));
    }
    if settings.generator.day_span <= 0 {
        return Err(ConfigError::ValidationError(
            "generator.day_span must be positive".to_string(),
        ));
    }

    Ok(settings)
}
