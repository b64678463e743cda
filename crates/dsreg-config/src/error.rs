//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// An environment override that does not parse as a boolean.
    #[error("Invalid {var}={value:?} overriding {key}: expected 1/true/yes/on or 0/false/no/off")]
    InvalidOverride {
        var: String,
        key: String,
        value: String,
    },

    /// A `${VAR}` reference to an unset variable.
    #[error("Environment variable {var} referenced by {key} is not set")]
    EnvVarNotSet { var: String, key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
