//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Report result cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Time-series resolution configuration.
    #[serde(default)]
    pub series: SeriesConfig,
}

/// Report result cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached reports.
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
    /// Time-to-live for cached reports, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    500
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

/// Time-series resolution configuration.
///
/// Maps the user-facing resolution choice to a target point budget for the
/// downsampler. The mapping is deployment policy, not engine logic, so it is
/// adjustable without touching core code.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesConfig {
    /// Target points for the low resolution.
    #[serde(default = "default_low_points")]
    pub low_points: usize,
    /// Target points for the standard resolution.
    #[serde(default = "default_standard_points")]
    pub standard_points: usize,
    /// Target points for the high resolution.
    #[serde(default = "default_high_points")]
    pub high_points: usize,
}

fn default_low_points() -> usize {
    60
}

fn default_standard_points() -> usize {
    120
}

fn default_high_points() -> usize {
    365
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            low_points: default_low_points(),
            standard_points: default_standard_points(),
            high_points: default_high_points(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PRAXIS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
