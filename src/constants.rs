//! Application constants
//!
//! Centralized location for storage keys, file names and defaults.

use crate::models::Language;

/// Storage key holding the language code
pub const LANG_STORAGE_KEY: &str = "imatoms_lang";

/// Language used when nothing is stored
pub const DEFAULT_LANGUAGE: Language = Language::Th;

/// Directory under the home directory holding persisted preferences
pub const CONFIG_DIR_NAME: &str = ".imatoms";

/// Overrides the config directory when set
pub const CONFIG_DIR_ENV: &str = "IMATOMS_HOME";

/// Preferences file inside the config directory
pub const PREFERENCES_FILE: &str = "preferences.yaml";

/// Log file written in the working directory
pub const LOG_FILE: &str = "imatoms.log";

/// Application name
pub const APP_NAME: &str = "iMATOMS";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
