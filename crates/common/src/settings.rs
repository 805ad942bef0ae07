//! Layered settings: optional TOML file, then `SIMPLEJWT__` environment
//! variables. Command-line flags are applied on top by the CLI.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use error_stack::{Report, ResultExt};
use serde::Deserialize;

use crate::error::SignerError;

/// Prefix for environment overrides, e.g. `SIMPLEJWT__SIGNING__KID`.
pub const ENV_PREFIX: &str = "SIMPLEJWT";

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Signing {
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default)]
    pub private_key_pem: Option<String>,
    #[serde(default)]
    pub private_key_file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub signing: Signing,
}

impl Settings {
    /// Merges an optional TOML document with `SIMPLEJWT__` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the TOML is malformed or a value has the wrong type.
    pub fn from_toml(toml_str: Option<&str>) -> Result<Self, ConfigError> {
        let environment = Environment::default()
            .prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__");

        let mut builder = Config::builder();
        if let Some(toml_str) = toml_str {
            builder = builder.add_source(File::from_str(toml_str, FileFormat::Toml));
        }

        let config = builder.add_source(environment).build()?;
        config.try_deserialize()
    }

    /// Loads settings from `path` (if given) and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Configuration`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, Report<SignerError>> {
        let content = match path {
            Some(path) => Some(std::fs::read_to_string(path).change_context(
                SignerError::Configuration {
                    message: format!("failed to read settings file {}", path.display()),
                },
            )?),
            None => None,
        };

        let settings =
            Self::from_toml(content.as_deref()).change_context(SignerError::Configuration {
                message: "failed to parse and merge settings".into(),
            })?;

        if let Some(path) = path {
            log::debug!("Loaded settings from {}", path.display());
        }

        Ok(settings)
    }
}
