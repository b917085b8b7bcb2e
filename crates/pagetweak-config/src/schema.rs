//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub executor: ExecutorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Step for relative font size commands, in pixels.
    #[serde(default = "default_font_step")]
    pub font_step_px: u32,

    /// Line height applied by "increase line height".
    #[serde(default = "default_line_height_increase")]
    pub line_height_increase: f64,

    /// Line height applied by "decrease line height".
    #[serde(default = "default_line_height_decrease")]
    pub line_height_decrease: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            font_step_px: default_font_step(),
            line_height_increase: default_line_height_increase(),
            line_height_decrease: default_line_height_decrease(),
        }
    }
}

fn default_font_step() -> u32 {
    2
}

fn default_line_height_increase() -> f64 {
    1.5
}

fn default_line_height_decrease() -> f64 {
    1.2
}

/// Executor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Floor for adjusted font sizes, in pixels.
    #[serde(default = "default_min_font_size")]
    pub min_font_size_px: f64,

    /// Prefix for the ids of mode style blocks.
    #[serde(default = "default_style_id_prefix")]
    pub style_id_prefix: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            min_font_size_px: default_min_font_size(),
            style_id_prefix: default_style_id_prefix(),
        }
    }
}

impl ExecutorConfig {
    /// Id of the high-contrast style block.
    pub fn high_contrast_block_id(&self) -> String {
        format!("{}high-contrast", self.style_id_prefix)
    }

    /// Id of the dark-mode style block.
    pub fn dark_mode_block_id(&self) -> String {
        format!("{}dark-mode", self.style_id_prefix)
    }
}

fn default_min_font_size() -> f64 {
    8.0
}

fn default_style_id_prefix() -> String {
    "pagetweak-".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Also write daily-rolling log files.
    #[serde(default)]
    pub file: bool,

    /// Directory for log files.
    #[serde(default = "default_log_directory")]
    pub directory: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: false,
            directory: default_log_directory(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "~/.pagetweak/logs".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
