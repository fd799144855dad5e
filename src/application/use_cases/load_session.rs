//! # Load Session Use Case
//!
//! 前回セッション読み込みユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::domain::repositories::session_repository::{Session, SessionRepository};

/// 前回セッション読み込みユースケース
pub struct LoadSessionUseCase<S: SessionRepository> {
    session_repository: Arc<S>,
}

impl<S: SessionRepository> LoadSessionUseCase<S> {
    pub fn new(session_repository: Arc<S>) -> Self {
        Self { session_repository }
    }

    /// 前回セッションを読み込む
    ///
    /// # Returns
    ///
    /// 保存データが無い場合は `None`
    ///
    /// # Errors
    ///
    /// 保存データの読み込みに失敗した場合にエラーを返す
    pub async fn execute(&self, path: &str) -> Result<Option<Session>> {
        self.session_repository.load(path).await
    }
}
