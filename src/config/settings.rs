//! User settings for the household ledger
//!
//! Stored as `config.json` in the base directory. Every field has a default
//! so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::MonthWindow;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Month offsets covered by the overview
    #[serde(default)]
    pub window: MonthWindow,

    /// Local hour at which transaction reminders fire
    #[serde(default = "default_reminder_hour")]
    pub reminder_hour: u32,

    #[serde(default)]
    pub reminder_minute: u32,

    /// When false the notification center refuses new reminders
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default tracing filter level; `HOUSEHOLD_LOG` overrides it
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_reminder_hour() -> u32 {
    8
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            window: MonthWindow::default(),
            reminder_hour: default_reminder_hour(),
            reminder_minute: 0,
            notifications_enabled: true,
            currency_symbol: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Caller decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.window.start > self.window.end {
            return Err(LedgerError::Config(format!(
                "window start ({}) is after window end ({})",
                self.window.start, self.window.end
            )));
        }
        if self.reminder_hour > 23 || self.reminder_minute > 59 {
            return Err(LedgerError::Config(format!(
                "invalid reminder time {:02}:{:02}",
                self.reminder_hour, self.reminder_minute
            )));
        }
        Ok(())
    }
}
