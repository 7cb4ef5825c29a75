// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes DatasetConfig as pretty-printed JSON.
//
//   <dir>/dataset_config.json
//
// Export writes the effective config next to its output so
// the exact split, tokenizer and length settings travel with
// the data. The CLI's --config flag reads a file back.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::config::DatasetConfig;

pub const CONFIG_FILE: &str = "dataset_config.json";

pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `cfg` to `<dir>/dataset_config.json`, creating the
    /// directory if needed. Returns the file path.
    pub fn save(&self, cfg: &DatasetConfig) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved dataset config to '{}'", path.display());
        Ok(path)
    }

    /// Read a config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<DatasetConfig> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid dataset config in '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = DatasetConfig {
            dataset_name: "splice_sites".to_string(),
            rc_aug:       true,
            seed:         Some(3),
            ..DatasetConfig::default()
        };

        let path = ConfigStore::new(tmp.path().join("out")).save(&cfg).unwrap();
        assert!(path.ends_with(CONFIG_FILE));
        assert_eq!(ConfigStore::load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ConfigStore::load("/definitely/not/here.json").is_err());
    }
}
