use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{DEFAULT_TIMEZONE, SETTINGS_ENV_PREFIX, SETTINGS_FILE_NAME};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Zone applied when a request does not name one.
    pub default_timezone: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("schedule.default_timezone", DEFAULT_TIMEZONE)?)
    }

    /// ## Summary
    /// Loads configuration from `windowcheck.toml` and `WINDOWCHECK_*`
    /// environment variables into a `Settings`.
    /// Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // TOML file
            .add_source(config::File::with_name(SETTINGS_FILE_NAME).required(false))
            // Env, e.g. WINDOWCHECK_SCHEDULE__DEFAULT_TIMEZONE
            .add_source(
                config::Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_sources() {
        let settings = Settings::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.schedule.default_timezone, "UTC");
    }

    #[test]
    fn file_values_override_defaults() {
        let toml = r#"
            [logging]
            level = "debug"

            [schedule]
            default_timezone = "Australia/Sydney"
        "#;
        let settings = Settings::builder()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.schedule.default_timezone, "Australia/Sydney");
    }
}
