use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".expense_core";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "transactions.csv";
const DEFAULT_RECENT_LIMIT: usize = 10;

/// Returns the application data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Tunables the shell reads at startup. Absent file means defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Name of the primary data file inside the data directory.
    pub data_file_name: String,
    /// How many entries the "recent transactions" view shows.
    pub recent_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file_name: DEFAULT_DATA_FILE.into(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Config {
    /// Absolute path of the primary data file under `base`.
    pub fn data_file_in(&self, base: &Path) -> PathBuf {
        base.join(&self.data_file_name)
    }
}

/// Loads and saves the JSON config file inside a base directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("manager");
        let config = manager.load().expect("load defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.data_file_name, "transactions.csv");
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("manager");
        let config = Config {
            data_file_name: "ledger.txt".into(),
            recent_limit: 25,
        };
        manager.save(&config).expect("save config");
        let loaded = manager.load().expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn data_file_path_joins_the_base_dir() {
        let config = Config::default();
        let path = config.data_file_in(Path::new("/tmp/base"));
        assert_eq!(path, PathBuf::from("/tmp/base/transactions.csv"));
    }
}
