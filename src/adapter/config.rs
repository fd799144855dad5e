//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::session_config::SessionConfig;

pub const DEFAULT_SESSION_PATH: &str = "./data.json";

/// レポートのmm表示の小数点以下桁数
pub const DEFAULT_PRECISION: usize = 6;

fn default_session_path() -> String {
    DEFAULT_SESSION_PATH.to_string()
}

fn default_save_session() -> bool {
    true
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// 前回セッションの保存先（`~` 展開可）
    #[serde(default = "default_session_path")]
    pub session_path: String,

    /// 計算成功時にセッションを保存するかどうか
    #[serde(default = "default_save_session")]
    pub save_session: bool,

    /// mm表示の小数点以下桁数
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// 設定ファイルが無ければデフォルト設定を使う
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// `~` を展開したセッションファイルのパス
    pub fn resolved_session_path(&self) -> String {
        shellexpand::tilde(&self.session_path).into_owned()
    }

    /// Application層向けのセッション保存設定に変換
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.resolved_session_path(), self.save_session)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_path: default_session_path(),
            save_session: default_save_session(),
            precision: default_precision(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.session_path, "./data.json");
        assert!(config.save_session);
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "session_path": "/tmp/grating/session.json",
            "save_session": false,
            "precision": 8
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.session_path, "/tmp/grating/session.json");
        assert!(!config.save_session);
        assert_eq!(config.precision, 8);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"save_session": false}"#).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.session_path, DEFAULT_SESSION_PATH);
        assert!(!config.save_session);
        assert_eq!(config.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(Config::load("/nonexistent/path/config.json").is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/path/config.json").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolved_session_path_expands_tilde() {
        let config = Config {
            session_path: "~/grating/data.json".to_string(),
            ..Config::default()
        };

        let resolved = config.resolved_session_path();

        assert!(!resolved.starts_with('~'));
        assert!(resolved.ends_with("/grating/data.json"));
    }

    #[test]
    fn test_session_config() {
        let config = Config {
            session_path: "/tmp/data.json".to_string(),
            save_session: false,
            precision: 6,
        };

        let session_config = config.session_config();

        assert_eq!(session_config.path, "/tmp/data.json");
        assert!(!session_config.persist);
    }
}
