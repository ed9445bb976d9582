//! File-system persistence.

mod settings_repository;

pub use settings_repository::{LOG_ENV_VAR, SettingsError, SettingsRepository};
