//! Configuration validation.

use tracing_subscriber::filter::Directive;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_registry(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_registry(config: &Config, result: &mut ValidationResult) {
        if config.registry.allow_overwrite {
            result.add_warning(ValidationWarning::new(
                "registry.allow_overwrite",
                "duplicate builder names will silently replace earlier registrations",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new("logging.level", "Level cannot be empty"));
        } else {
            // Same split as `EnvFilter`, which consumes this string at startup.
            for directive in level.split(',').filter(|d| !d.trim().is_empty()) {
                if let Err(e) = directive.trim().parse::<Directive>() {
                    result.add_error(ValidationError::new(
                        "logging.level",
                        format!("Invalid filter directive {:?}: {}", directive, e),
                    ));
                }
            }
        }

        if config.logging.log_dir.as_deref() == Some("") {
            result.add_error(ValidationError::new(
                "logging.log_dir",
                "Log directory cannot be empty; omit it to disable file logging",
            ));
        }

        if config.logging.log_dir.is_some() && config.logging.max_log_files == 0 {
            result.add_error(ValidationError::new(
                "logging.max_log_files",
                "max_log_files must be greater than 0",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
