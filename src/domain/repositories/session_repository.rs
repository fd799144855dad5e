//! # Session Repository Trait
//!
//! 前回セッション（入力と結果）の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::computation_result::ComputationResult;

/// 前回のセッション
///
/// 5つの生の角度文字列と、それから得られた計算結果の組
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// 入力されたままの角度文字列
    pub angle_inputs: Vec<String>,
    /// 計算結果
    pub result: ComputationResult,
    /// 保存日時（古い保存ファイルには存在しない）
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    /// 新しいセッションを作成
    pub fn new(angle_inputs: Vec<String>, result: ComputationResult) -> Self {
        Self {
            angle_inputs,
            result,
            saved_at: None,
        }
    }

    /// 保存日時を付与する
    pub fn with_saved_at(mut self, saved_at: DateTime<Utc>) -> Self {
        self.saved_at = Some(saved_at);
        self
    }
}

/// セッションリポジトリ
///
/// 単一の保存スロットを持ち、保存のたびに上書きする
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// セッションを読み込む
    ///
    /// # Returns
    ///
    /// 保存データが無い場合は `None`（エラーではない）
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはパースに失敗した場合にエラーを返す
    async fn load(&self, path: &str) -> Result<Option<Session>>;

    /// セッションを保存する（前回の内容を上書き）
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &str, session: &Session) -> Result<()>;

    /// 保存されたセッションを削除する
    ///
    /// # Returns
    ///
    /// 削除したかどうか（保存データが無ければ `false`）
    ///
    /// # Errors
    ///
    /// ファイルの削除に失敗した場合にエラーを返す
    async fn clear(&self, path: &str) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::angle::DegreesMinutes;
    use chrono::TimeZone;

    fn create_test_result() -> ComputationResult {
        ComputationResult {
            mean_angle: DegreesMinutes::new(30, 16.02),
            std_deviation: DegreesMinutes::new(0, 3.94),
            angular_uncertainty_rad: 0.001_184,
            mean_spacing_mm: 0.001_083,
            spacing_uncertainty_mm: 0.000_002,
            relative_uncertainty_percent: 0.2,
            lower_bound_mm: 0.001_081,
            upper_bound_mm: 0.001_085,
        }
    }

    #[test]
    fn test_new_session() {
        let inputs = vec!["30°15.5′".to_string(); 5];
        let session = Session::new(inputs.clone(), create_test_result());

        assert_eq!(session.angle_inputs, inputs);
        assert!(session.saved_at.is_none());
    }

    #[test]
    fn test_with_saved_at() {
        let timestamp = Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap();
        let session = Session::new(vec![], create_test_result()).with_saved_at(timestamp);

        assert_eq!(session.saved_at, Some(timestamp));
    }
}
