//! User settings for Pennywise
//!
//! Currency defaults, the negative-amount policy and the log filter. Only
//! settings are stored on disk; the ledger itself lives in memory.

use serde::{Deserialize, Serialize};

use super::paths::PennywisePaths;
use crate::error::PennywiseError;
use crate::models::{Currency, NegativeAmountPolicy};

/// User settings for Pennywise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency for newly entered amounts
    #[serde(default)]
    pub default_currency: Currency,

    /// Currency monthly reports are totalled in; follows `default_currency`
    /// when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_currency: Option<Currency>,

    /// Which negative amounts are accepted
    #[serde(default)]
    pub negative_amounts: NegativeAmountPolicy,

    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_filter() -> String {
    "pennywise=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: Currency::default(),
            reporting_currency: None,
            negative_amounts: NegativeAmountPolicy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Currency reports are totalled in
    pub fn reporting_currency(&self) -> &Currency {
        self.reporting_currency
            .as_ref()
            .unwrap_or(&self.default_currency)
    }

    /// Use `currency` for both entry and reporting
    pub fn set_currency(&mut self, currency: Currency) {
        self.default_currency = currency;
        self.reporting_currency = None;
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &PennywisePaths) -> Result<Self, PennywiseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PennywiseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            PennywiseError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PennywisePaths) -> Result<(), PennywiseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PennywiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PennywiseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check fields serde cannot check on its own
    pub fn validate(&self) -> Result<(), PennywiseError> {
        if self.log_filter.trim().is_empty() {
            return Err(PennywiseError::Config("log_filter must not be empty".into()));
        }
        if self.reporting_currency() != &self.default_currency {
            return Err(PennywiseError::Config(format!(
                "reporting_currency {} differs from default_currency {}; \
                 amounts are entered in {} so every report would fail",
                self.reporting_currency(),
                self.default_currency,
                self.default_currency
            )));
        }
        if self.schema_version != default_schema_version() {
            return Err(PennywiseError::Config(format!(
                "Unsupported settings schema version {}",
                self.schema_version
            )));
        }
        Ok(())
    }
}
