//! Loading [`BillingConfig`] from a TOML file and environment variables.
//!
//! Sources, lowest precedence first:
//! 1. [`BillingConfig::default`] (13% VAT, 25% margin, CRC)
//! 2. `caja.toml` in the working directory, or an explicit path
//! 3. `CAJA_TAX_RATE`, `CAJA_DEFAULT_MARGIN`, `CAJA_CURRENCY_CODE`
//!
//! ```toml
//! tax_rate = "0.13"
//! default_margin = "0.25"
//! currency_code = "CRC"
//! ```

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use tracing::warn;

use crate::core::{BillingConfig, BillingError};

/// File read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "caja.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CAJA";

impl BillingConfig {
    /// Load configuration from `path` (or [`DEFAULT_CONFIG_FILE`]) plus
    /// `CAJA_*` environment variables, then validate it.
    ///
    /// When no path is given, an unreadable default file falls back to the
    /// built-in defaults. An explicit path must exist and parse.
    pub fn load(path: Option<&str>) -> Result<Self, BillingError> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    /// Same as [`BillingConfig::load`] with a custom environment prefix.
    pub fn load_with_env_prefix(path: Option<&str>, env_prefix: &str) -> Result<Self, BillingError> {
        let settings = match Self::load_sources(path, env_prefix) {
            Ok(settings) => settings,
            Err(err) if path.is_none() => {
                warn!("Could not read config file: {err}. Using default configuration.");
                Self::default()
            }
            Err(err) => return Err(err),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn load_sources(path: Option<&str>, env_prefix: &str) -> Result<Self, BillingError> {
        let file = Path::new(path.unwrap_or(DEFAULT_CONFIG_FILE));

        Config::builder()
            .add_source(
                File::from(file)
                    .format(FileFormat::Toml)
                    .required(path.is_some()),
            )
            .add_source(Environment::with_prefix(env_prefix))
            .build()
            .and_then(|config| config.try_deserialize::<BillingConfig>())
            .map_err(|e| BillingError::Config(e.to_string()))
    }
}
