//! # Clear Session Use Case
//!
//! 保存済みセッション削除ユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::domain::repositories::session_repository::SessionRepository;

/// 保存済みセッション削除ユースケース
pub struct ClearSessionUseCase<S: SessionRepository> {
    session_repository: Arc<S>,
}

impl<S: SessionRepository> ClearSessionUseCase<S> {
    pub fn new(session_repository: Arc<S>) -> Self {
        Self { session_repository }
    }

    /// 保存済みセッションを削除する
    ///
    /// # Returns
    ///
    /// 削除したかどうか
    ///
    /// # Errors
    ///
    /// 削除に失敗した場合にエラーを返す
    pub async fn execute(&self, path: &str) -> Result<bool> {
        self.session_repository.clear(path).await
    }
}
