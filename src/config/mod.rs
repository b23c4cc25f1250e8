use crate::core::conflicts::DEFAULT_PREVIEW_LIMIT;
use crate::errors::AppResult;
use crate::models::{SortOrder, StatusFilter};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub default_status: StatusFilter,
    #[serde(default)]
    pub default_sort: SortOrder,
    #[serde(default = "default_preview_limit")]
    pub conflict_preview_limit: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_preview_limit() -> usize {
    DEFAULT_PREVIEW_LIMIT
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_status: StatusFilter::default(),
            default_sort: SortOrder::default(),
            conflict_preview_limit: default_preview_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("athletica")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".athletica")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("athletica.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("athletica.sqlite")
    }

    /// Load configuration from the standard file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Write the config file (unless `is_test`) and make sure the database
    /// file exists. Returns the database path that was set up.
    pub fn init_all(&self, custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => PathBuf::from(&self.database),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..self.clone()
            };
            config.save_to(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        success(format!("Database:    {}", db_path.display()));

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("default_sort: desc\n").unwrap();
        assert_eq!(cfg.default_sort, SortOrder::Desc);
        assert_eq!(cfg.default_status, StatusFilter::Upcoming);
        assert_eq!(cfg.conflict_preview_limit, 3);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn save_and_load_agree() {
        let path = env::temp_dir().join("athletica_config_roundtrip.conf");
        let cfg = Config {
            database: "/tmp/x.sqlite".into(),
            default_status: StatusFilter::All,
            conflict_preview_limit: 5,
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.database, "/tmp/x.sqlite");
        assert_eq!(loaded.default_status, StatusFilter::All);
        assert_eq!(loaded.conflict_preview_limit, 5);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = env::temp_dir().join("athletica_config_broken.conf");
        fs::write(&path, "conflict_preview_limit: [not, a, number]\n").unwrap();
        assert!(Config::load_from(&path).is_err());
        fs::remove_file(&path).ok();
    }
}
