//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Without any config file, the defaults apply
//!
//! ## Environment Variables
//! - `CALTALLY_WEEK_START`: First day of the week, e.g. `Sun` or `monday`
//! - `CALTALLY_REPORTING_THRESHOLD`: Minimum count for the min-count statistic
//! - `CALTALLY_IGNORE_MODE`: `skip` or `inspect` (optional)
//! - `CALTALLY_FIRST_SEGMENT_WIDTH`: Report column width (optional)
//! - `CALTALLY_LOG_LEVEL`: Tracing filter directive (optional)
//! - `CALTALLY_LOG_JSON`: Emit JSON log lines (true/false, optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./caltally.json` or `./caltally.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../` and `../../` variants of the above
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use caltally_domain::{
    CalTallyError, Config, EngineConfig, IgnoreListMode, LoggingConfig, Result,
};
use chrono::Weekday;
use tracing_subscriber::EnvFilter;

use crate::errors::InfraError;

const ENV_WEEK_START: &str = "CALTALLY_WEEK_START";
const ENV_REPORTING_THRESHOLD: &str = "CALTALLY_REPORTING_THRESHOLD";
const ENV_IGNORE_MODE: &str = "CALTALLY_IGNORE_MODE";
const ENV_FIRST_SEGMENT_WIDTH: &str = "CALTALLY_FIRST_SEGMENT_WIDTH";
const ENV_LOG_LEVEL: &str = "CALTALLY_LOG_LEVEL";
const ENV_LOG_JSON: &str = "CALTALLY_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["caltally.json", "caltally.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to a probed config file, and to the
/// defaults when no file exists.
///
/// # Errors
/// Returns `CalTallyError::Config` if:
/// - An environment value or the config file is invalid
/// - The loaded configuration fails [`validate`]
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `CALTALLY_WEEK_START` and `CALTALLY_REPORTING_THRESHOLD` must be present;
/// the optional variables fall back to their defaults.
///
/// # Errors
/// Returns `CalTallyError::Config` if required variables are missing
/// or any variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let week_start = env_var(ENV_WEEK_START).and_then(|s| {
        s.trim()
            .parse::<Weekday>()
            .map_err(|_| CalTallyError::Config(format!("Invalid week start: {s}")))
    })?;
    let reporting_threshold = env_var(ENV_REPORTING_THRESHOLD).and_then(|s| {
        s.trim()
            .parse::<i64>()
            .map_err(|e| CalTallyError::Config(format!("Invalid reporting threshold: {e}")))
    })?;

    let defaults = EngineConfig::default();

    let ignore_mode = match std::env::var(ENV_IGNORE_MODE).ok() {
        Some(s) => s
            .parse::<IgnoreListMode>()
            .map_err(|e| CalTallyError::Config(format!("Invalid ignore mode: {e}")))?,
        None => defaults.ignore_mode,
    };
    let first_segment_width = match std::env::var(ENV_FIRST_SEGMENT_WIDTH).ok() {
        Some(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|e| CalTallyError::Config(format!("Invalid first segment width: {e}")))?,
        None => defaults.first_segment_width,
    };

    let logging = LoggingConfig {
        level: std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| LoggingConfig::default().level),
        json: env_bool(ENV_LOG_JSON, false),
    };

    let config = Config {
        engine: EngineConfig { week_start, reporting_threshold, ignore_mode, first_segment_width },
        logging,
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections or fields missing from the file keep their defaults.
///
/// # Errors
/// Returns `CalTallyError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The loaded configuration fails [`validate`]
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CalTallyError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CalTallyError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CalTallyError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Check value ranges that serde cannot express
///
/// # Errors
/// Returns `CalTallyError::Config` if the reporting threshold is negative,
/// the first segment width is zero or the log level is not a valid filter.
pub fn validate(config: &Config) -> Result<()> {
    if config.engine.reporting_threshold < 0 {
        return Err(CalTallyError::Config(format!(
            "Reporting threshold must not be negative (got {})",
            config.engine.reporting_threshold
        )));
    }

    if config.engine.first_segment_width == 0 {
        return Err(CalTallyError::Config("First segment width must be positive".to_string()));
    }

    EnvFilter::try_new(&config.logging.level).map_err(|e| {
        CalTallyError::Config(format!("Invalid log level '{}': {e}", config.logging.level))
    })?;

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `CalTallyError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CalTallyError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CalTallyError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./caltally.{json,toml}`,
///    `./config.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_under(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_under(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Config file candidates in `dir` and its two parent levels
fn candidates_under(dir: &Path) -> Vec<PathBuf> {
    ["", "..", "../.."]
        .iter()
        .flat_map(|up| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(up).join(name)))
        .collect()
}

/// Get required environment variable
///
/// # Errors
/// Returns `CalTallyError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        CalTallyError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
