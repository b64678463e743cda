//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Environment variable forcing `registry.allow_overwrite`.
pub const ALLOW_OVERWRITE_ENV: &str = "DSREG_ALLOW_OVERWRITE";

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex must compile"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    ///
    /// `${VAR}` references are expanded inside string values only, after
    /// parsing, so comments and keys are never touched.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let mut value: toml::Value = toml::from_str(content)?;
        Self::expand_value(&mut value, "", &|var| std::env::var(var).ok())?;
        let config: Config = value.try_into()?;
        Ok(config)
    }

    /// Default config location: `<config dir>/dsreg/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dsreg").join("config.toml"))
    }

    /// Load an explicit config file, or the default one if it exists, then
    /// apply environment overrides.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load(&default)?,
                _ => Config::default(),
            },
        };
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides read through `lookup` (normally the process environment).
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ALLOW_OVERWRITE_ENV) {
            config.registry.allow_overwrite =
                parse_bool(&value).ok_or_else(|| ConfigError::InvalidOverride {
                    var: ALLOW_OVERWRITE_ENV.to_string(),
                    key: "registry.allow_overwrite".to_string(),
                    value,
                })?;
        }
        Ok(())
    }

    /// Expand `${VAR}` in every string below `value`; `key` is its dotted path.
    fn expand_value<F>(value: &mut toml::Value, key: &str, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match value {
            toml::Value::String(s) => *s = Self::expand_env_vars(s, key, lookup)?,
            toml::Value::Array(items) => {
                for item in items {
                    Self::expand_value(item, key, lookup)?;
                }
            }
            toml::Value::Table(table) => {
                for (name, item) in table.iter_mut() {
                    let path = if key.is_empty() {
                        name.clone()
                    } else {
                        format!("{}.{}", key, name)
                    };
                    Self::expand_value(item, &path, lookup)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars<F>(content: &str, key: &str, lookup: &F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = lookup(var_name).ok_or_else(|| ConfigError::EnvVarNotSet {
                var: var_name.to_string(),
                key: key.to_string(),
            })?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.dsreg`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
