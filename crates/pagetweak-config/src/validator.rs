//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

const KNOWN_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

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

        Self::validate_classifier(config, &mut result);
        Self::validate_executor(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_classifier(config: &Config, result: &mut ValidationResult) {
        let classifier = &config.classifier;

        if classifier.font_step_px == 0 {
            result.add_error(ValidationError::new(
                "classifier.font_step_px",
                "font_step_px must be greater than 0",
            ));
        } else if classifier.font_step_px > 16 {
            result.add_warning(ValidationWarning::new(
                "classifier.font_step_px",
                "font_step_px is very high (>16), one command will change text drastically",
            ));
        }

        for (path, value) in [
            ("classifier.line_height_increase", classifier.line_height_increase),
            ("classifier.line_height_decrease", classifier.line_height_decrease),
        ] {
            if !value.is_finite() || value <= 0.0 {
                result.add_error(ValidationError::new(path, "line height must be a positive number"));
            }
        }

        if classifier.line_height_increase <= classifier.line_height_decrease {
            result.add_warning(ValidationWarning::new(
                "classifier.line_height_increase",
                "line_height_increase is not larger than line_height_decrease",
            ));
        }
    }

    fn validate_executor(config: &Config, result: &mut ValidationResult) {
        let executor = &config.executor;

        if !executor.min_font_size_px.is_finite() || executor.min_font_size_px <= 0.0 {
            result.add_error(ValidationError::new(
                "executor.min_font_size_px",
                "min_font_size_px must be a positive number",
            ));
        }

        let prefix = &executor.style_id_prefix;
        if prefix.is_empty() {
            result.add_error(ValidationError::new(
                "executor.style_id_prefix",
                "style_id_prefix cannot be empty",
            ));
        } else if !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            || !prefix.starts_with(|c: char| c.is_ascii_alphabetic())
        {
            result.add_error(ValidationError::new(
                "executor.style_id_prefix",
                format!(
                    "style_id_prefix '{}' must start with a letter and contain only letters, digits, '-' or '_'",
                    prefix
                ),
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_lowercase();
        // Full filter directives ("pagetweak=debug") are passed through untouched.
        if !level.contains('=') && !KNOWN_LEVELS.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, KNOWN_LEVELS
                ),
            ));
        }

        if config.logging.file && config.logging.directory.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.directory",
                "directory cannot be empty when file logging is enabled",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
