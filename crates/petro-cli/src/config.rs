use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How results are printed.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    /// Decimal places for printed values.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: default_format(), precision: default_precision() }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter(), json: false }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PetrocalcConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The default file was absent; built-in defaults apply.
    Defaults(PathBuf),
}

impl PetrocalcConfig {
    /// Loads configuration from `explicit`, else `PETROCALC_CONFIG_PATH`, else
    /// `petrocalc.toml`. An explicitly named file must exist; an absent
    /// default file falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        let path = PathBuf::from(
            std::env::var("PETROCALC_CONFIG_PATH").unwrap_or_else(|_| "petrocalc.toml".to_string()),
        );
        if path.exists() {
            let config = Self::from_file(&path)?;
            Ok((config, ConfigSource::File(path)))
        } else {
            Ok((Self::default(), ConfigSource::Defaults(path)))
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file '{}'", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse configuration file '{}'", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Applies `PETROCALC_*` environment overrides.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`. Unparseable values are
    /// ignored.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(format) = lookup("PETROCALC_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "text" => self.output.format = OutputFormat::Text,
                "json" => self.output.format = OutputFormat::Json,
                _ => {}
            }
        }
        if let Some(precision) = lookup("PETROCALC_PRECISION") {
            if let Ok(precision) = precision.parse::<usize>() {
                self.output.precision = precision;
            }
        }
        if let Some(filter) = lookup("PETROCALC_LOG") {
            self.logging.filter = filter;
        }
        if let Some(json) = lookup("PETROCALC_LOG_JSON") {
            if let Ok(json) = json.parse::<bool>() {
                self.logging.json = json;
            }
        }
        self
    }
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_precision() -> usize {
    2
}

fn default_filter() -> String {
    "warn".to_string()
}
