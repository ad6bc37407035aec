use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured store location.
pub const DB_ENV_VAR: &str = "CATLOG_DB";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite file holding the care log sheets.
    pub database: String,
    /// How long a fetched sheet may be reused, in seconds (0 = never).
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_spoon_to_gram")]
    pub spoon_to_gram: f64,
    /// Number of days shown in the feeding trend.
    #[serde(default = "default_trend_days")]
    pub trend_days: usize,
    /// Subject used when a command does not name one.
    #[serde(default)]
    pub default_subject: Option<String>,
}

fn default_cache_ttl() -> u64 {
    5
}
fn default_spoon_to_gram() -> f64 {
    crate::core::summary::SPOON_TO_GRAM
}
fn default_trend_days() -> usize {
    14
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            cache_ttl_secs: default_cache_ttl(),
            spoon_to_gram: default_spoon_to_gram(),
            trend_days: default_trend_days(),
            default_subject: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("catlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".catlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("catlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("catlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// `CATLOG_DB` overrides the `database` entry.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;

        if let Ok(db) = env::var(DB_ENV_VAR)
            && !db.trim().is_empty()
        {
            cfg.database = db;
        }
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(format!(
            "{}: {}",
            path.display(),
            e
        )))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Resolve the database path for `init`: user provided (relative paths
    /// land in the config directory) or the default one.
    pub fn resolve_db_path(custom_name: Option<&str>) -> PathBuf {
        match custom_name {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        }
    }

    /// Initialize configuration directory and file. Returns the database path.
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = Self::resolve_db_path(custom_name);

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_conf(name: &str, body: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("{}_catlog.conf", name));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_fields_take_defaults() {
        let path = temp_conf("cfg_defaults", "database: /tmp/x.sqlite\n");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.cache_ttl_secs, 5);
        assert_eq!(cfg.spoon_to_gram, 11.0);
        assert_eq!(cfg.trend_days, 14);
        assert!(cfg.default_subject.is_none());
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let path = temp_conf("cfg_invalid", "database: [unterminated\n");
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = env::temp_dir().join("cfg_does_not_exist_catlog.conf");
        let _ = fs::remove_file(&path);
        let cfg = Config::load_from(&path).unwrap();
        assert!(cfg.database.ends_with("catlog.sqlite"));
    }

    #[test]
    fn relative_db_names_live_in_the_config_dir() {
        let p = Config::resolve_db_path(Some("mimi.sqlite"));
        assert_eq!(p, Config::config_dir().join("mimi.sqlite"));
    }
}
