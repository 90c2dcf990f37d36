//! Configuration loading and merging logic.
//!
//! Missing config files are not errors; parse errors and validation
//! failures are.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{NotifyConfig, PollConfig, VitabarConfig};
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.vitabar/config.toml`)
/// 3. Project config (`./.vitabar/config.toml`)
///
/// # Errors
///
/// Returns an error if a present file fails to read or parse, or if the
/// merged configuration fails validation.
pub fn load_hierarchy() -> Result<VitabarConfig, ConfigError> {
    let mut config = VitabarConfig::default();

    if let Some(home_dir) = dirs::home_dir() {
        let user_path = home_dir.join(".vitabar").join("config.toml");
        if let Some(user_config) = load_config_file(&user_path)? {
            config = merge_configs(config, user_config);
        }
    }

    let project_path = Path::new(".vitabar").join("config.toml");
    if let Some(project_config) = load_config_file(&project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` when it does not exist.
fn load_config_file(path: &PathBuf) -> Result<Option<VitabarConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::IoError {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let config: VitabarConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Optional fields replace base values only if present.
pub fn merge_configs(base: VitabarConfig, override_config: VitabarConfig) -> VitabarConfig {
    VitabarConfig {
        poll: PollConfig {
            command: override_config.poll.command.or(base.poll.command),
            interval_secs: override_config.poll.interval_secs.or(base.poll.interval_secs),
        },
        notify: NotifyConfig {
            title: override_config.notify.title.or(base.notify.title),
            // A bool can't distinguish "omitted" from "explicit default",
            // so the override section always wins.
            enabled: override_config.notify.enabled,
        },
    }
}

/// Validate the merged configuration.
pub fn validate_config(config: &VitabarConfig) -> Result<(), ConfigError> {
    if config.poll.command().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "poll.command must not be empty".to_string(),
        });
    }

    if config.poll.interval_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "poll.interval_secs must be at least 1".to_string(),
        });
    }

    Ok(())
}
