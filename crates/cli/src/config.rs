use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use grocer_observability::LogConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub logging: LogConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog document. The built-in demo catalog is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub currency_code: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            currency_code: "CAD".to_string(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the optional TOML file, then
    /// `GROCER__SECTION__KEY` environment variables.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("GROCER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.display.currency_symbol.trim().is_empty() && self.display.currency_code.trim().is_empty() {
            return Err("display needs a currency symbol or a currency code".to_string());
        }
        if self.logging.level.trim().is_empty() {
            return Err("logging level cannot be empty".to_string());
        }
        Ok(())
    }
}
