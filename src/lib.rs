//! Direct research responder for the Suna API
//!
//! Answers a text query with a fixed, query-templated set of research records
//! and echoes the caller's session identifier back. No search provider,
//! cache or authentication layer sits behind it.

pub mod research;
mod utils;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use research::{ResearchResponder, ResearchResponse, ResearchResult, perform_research};
pub use utils::constants::{LOGGER_NAME, RESULT_COUNT, USAGE};
pub use utils::errors::ResearchError;
pub use utils::logging::{ResearchLog, TargetLogger, init_logging};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log stream configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// env_logger filter directive; `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// chrono strftime pattern for the line timestamp
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_log_level() -> String {
    utils::constants::DEFAULT_LOG_LEVEL.to_string()
}

fn default_timestamp_format() -> String {
    utils::constants::DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SUNA_RESEARCH_CONFIG";

/// Default config location: `<user config dir>/suna/research.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("suna").join("research.yaml"))
}

/// Pick the config file to load
///
/// An explicit path always wins. Otherwise the default location is used when
/// it exists; `None` means defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    }
}

/// Load config from YAML
///
/// An explicit `path` must exist and parse. Without one, the default location
/// is tried and missing files fall back to [`Config::default`].
pub fn load_yaml_config(path: Option<&Path>) -> Result<Config, ResearchError> {
    let Some(config_path) = resolve_config_path(path) else {
        return Ok(Config::default());
    };

    let path_label = config_path.display().to_string();

    let contents = fs::read_to_string(&config_path).map_err(|e| ResearchError::ConfigIo {
        path: path_label.clone(),
        reason: e.to_string(),
    })?;

    let config: Config = serde_yaml::from_str(&contents).map_err(|e| ResearchError::ConfigParse {
        path: path_label.clone(),
        reason: e.to_string(),
    })?;

    validate_timestamp_format(&config.logging.timestamp_format).map_err(|reason| {
        ResearchError::ConfigParse {
            path: path_label,
            reason,
        }
    })?;

    Ok(config)
}

fn validate_timestamp_format(pattern: &str) -> Result<(), String> {
    use chrono::format::{Item, StrftimeItems};

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(format!("invalid timestamp_format: {pattern:?}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.timestamp_format, "%Y-%m-%d %H:%M:%S,%3f");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let file = write_config("logging:\n  level: debug\n");
        let config = load_yaml_config(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.timestamp_format, default_timestamp_format());
    }

    #[test]
    fn empty_mapping_is_default() {
        let file = write_config("{}\n");
        let config = load_yaml_config(Some(file.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_path_is_resolved_verbatim() {
        let file = write_config("logging:\n  level: debug\n");
        assert_eq!(
            resolve_config_path(Some(file.path())),
            Some(file.path().to_path_buf())
        );

        let config = load_yaml_config(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_default_location_resolves_to_defaults() {
        if resolve_config_path(None).is_none() {
            assert_eq!(load_yaml_config(None).unwrap(), Config::default());
        }
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = load_yaml_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, ResearchError::ConfigIo { .. }));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let file = write_config("logging: [unterminated\n");
        let err = load_yaml_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ResearchError::ConfigParse { .. }));
    }

    #[test]
    fn bad_timestamp_pattern_is_rejected() {
        let file = write_config("logging:\n  timestamp_format: \"%Q\"\n");
        let err = load_yaml_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp_format"));
    }
}
