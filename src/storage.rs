use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, PREFERENCES_FILE};
use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key/value preference store persisted as YAML
pub struct Storage {
    values: BTreeMap<String, String>,
    config_dir: PathBuf,
}

impl Storage {
    /// Open the store in the user's config directory
    pub fn new() -> Self {
        let config_dir = std::env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(CONFIG_DIR_NAME)
            });
        Self::in_dir(config_dir)
    }

    /// Open the store rooted at `config_dir`
    pub fn in_dir(config_dir: impl Into<PathBuf>) -> Self {
        let mut storage = Storage {
            values: BTreeMap::new(),
            config_dir: config_dir.into(),
        };

        // Unreadable preferences fall back to an empty store
        if let Err(e) = storage.load() {
            tracing::warn!("Could not load preferences: {e:#}");
        }
        storage
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn preferences_path(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE)
    }

    /// Get a stored value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a value and write the store back to disk
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    /// Ensure config directory exists
    fn ensure_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_yaml::to_string(&self.values)?;
        fs::write(self.preferences_path(), content)?;
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let path = self.preferences_path();
        if !path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&path)?;
        self.values = serde_yaml::from_str(&content)?;
        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_dir_has_no_values() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path().join("missing"));
        assert_eq!(storage.get("imatoms_lang"), None);
    }

    #[test]
    fn test_set_persists_across_instances() {
        let dir = tempdir().unwrap();
        let mut storage = Storage::in_dir(dir.path());
        storage.set("imatoms_lang", "EN").unwrap();

        let reopened = Storage::in_dir(dir.path());
        assert_eq!(reopened.get("imatoms_lang"), Some("EN"));
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), "- not\n- a map\n").unwrap();
        let storage = Storage::in_dir(dir.path());
        assert_eq!(storage.get("imatoms_lang"), None);
    }

    #[test]
    fn test_set_fails_when_dir_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "").unwrap();

        let mut storage = Storage::in_dir(&blocker);
        assert!(storage.set("imatoms_lang", "EN").is_err());
        assert_eq!(storage.get("imatoms_lang"), Some("EN"));
    }
}
