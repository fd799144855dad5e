//! # Session Configuration DTO
//!
//! セッション保存設定のData Transfer Object

/// セッション保存設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// セッションファイルのパス
    pub path: String,
    /// 計算成功時にセッションを保存するかどうか
    pub persist: bool,
}

impl SessionConfig {
    /// 新しいセッション保存設定を作成します。
    ///
    /// ```
    /// use grating::application::dto::session_config::SessionConfig;
    ///
    /// let config = SessionConfig::new("./data.json".to_string(), true);
    ///
    /// assert_eq!(config.path, "./data.json");
    /// assert!(config.persist);
    /// ```
    pub fn new(path: String, persist: bool) -> Self {
        Self { path, persist }
    }
}
