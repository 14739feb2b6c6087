use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the "best month" metric picks its winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestMonthRule {
    /// Month with the most distinct workout days.
    #[default]
    DistinctDays,
    /// Month with the most logged sets.
    MostSets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_rest_timer_marker")]
    pub rest_timer_marker: String,
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
    #[serde(default)]
    pub best_month_rule: BestMonthRule,
}

fn default_rest_timer_marker() -> String {
    "Rest Timer".to_string()
}
fn default_date_formats() -> Vec<String> {
    vec![
        "%Y-%m-%d %H:%M:%S".to_string(),
        "%Y-%m-%d %H:%M".to_string(),
        "%Y-%m-%dT%H:%M:%S".to_string(),
        "%Y-%m-%d".to_string(),
    ]
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_weight_unit() -> String {
    "kg".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rest_timer_marker: default_rest_timer_marker(),
            date_formats: default_date_formats(),
            delimiter: default_delimiter(),
            weight_unit: default_weight_unit(),
            best_month_rule: BestMonthRule::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".strongdash")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("strongdash.conf")
    }

    /// Load the configuration from `path` (or the standard location),
    /// falling back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid "all defaults" config.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// The CSV delimiter as a single byte.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    /// List every problem found in the configuration; empty means valid.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(e) = self.delimiter_byte() {
            problems.push(e.to_string());
        }
        if self.date_formats.is_empty() {
            problems.push("date_formats must list at least one format".to_string());
        }
        if self.rest_timer_marker.trim().is_empty() {
            problems.push("rest_timer_marker must not be empty".to_string());
        }

        problems
    }
}
