//! # Compute Spacing Use Case
//!
//! 格子間隔計算ユースケース

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use crate::application::dto::session_config::SessionConfig;
use crate::domain::entities::computation_result::ComputationResult;
use crate::domain::repositories::session_repository::{Session, SessionRepository};
use crate::domain::services::grating_calculator::GratingCalculator;

/// 格子間隔計算ユースケース
///
/// 5つの角度文字列から結果を計算し、成功した場合のみセッションを保存する
pub struct ComputeSpacingUseCase<S: SessionRepository> {
    session_repository: Arc<S>,
}

impl<S: SessionRepository> ComputeSpacingUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `session_repository` - セッションリポジトリ
    pub fn new(session_repository: Arc<S>) -> Self {
        Self { session_repository }
    }

    /// 格子間隔を計算する
    ///
    /// # Arguments
    ///
    /// * `angle_inputs` - `度°分′` 形式の角度文字列（5つ）
    /// * `config` - セッション保存設定
    ///
    /// # Errors
    ///
    /// 計算に失敗した場合は [`crate::domain::error::MeasurementError`] を、
    /// セッションの保存に失敗した場合はI/Oエラーを返す。
    /// 計算に失敗した場合は何も保存しない
    pub async fn execute(
        &self,
        angle_inputs: &[String],
        config: &SessionConfig,
    ) -> Result<ComputationResult> {
        let result = GratingCalculator::calculate(angle_inputs)?;
        debug!("Computed result: {:?}", result);

        if config.persist {
            let session =
                Session::new(angle_inputs.to_vec(), result.clone()).with_saved_at(Utc::now());
            self.session_repository.save(&config.path, &session).await?;
            info!("Saved session to {}", config.path);
        }

        Ok(result)
    }
}
