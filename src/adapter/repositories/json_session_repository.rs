//! JSON Session Repository Implementation
//!
//! SessionRepositoryのJSON実装（前回セッションをJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::entities::angle::DegreesMinutes;
use crate::domain::entities::computation_result::ComputationResult;
use crate::domain::repositories::session_repository::{Session, SessionRepository};

/// JSONファイルベースのセッションリポジトリ
pub struct JsonSessionRepository;

/// 計算結果（JSON永続化用の内部表現）
///
/// キー名は以前の `data.json` と互換
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
struct ResultsJson {
    #[serde(rename = "Phi_bar_deg")]
    phi_bar_deg: i64,
    #[serde(rename = "Phi_bar_min")]
    phi_bar_min: f64,
    #[serde(rename = "S_phi_deg")]
    s_phi_deg: i64,
    #[serde(rename = "S_phi_min")]
    s_phi_min: f64,
    #[serde(rename = "Delta_phi_rad")]
    delta_phi_rad: f64,
    d_bar_mm: f64,
    #[serde(rename = "Delta_d_mm")]
    delta_d_mm: f64,
    #[serde(rename = "E_d_percent")]
    e_d_percent: f64,
    d_min_mm: f64,
    d_max_mm: f64,
}

/// セッション（JSON永続化用の内部表現）
#[derive(Debug, Deserialize, Serialize)]
struct SessionJson {
    angle_inputs: Vec<String>,
    results: ResultsJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

impl JsonSessionRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルからセッションを読み込む（同期処理）
    fn load_sync(path: &str) -> Result<Option<SessionJson>> {
        let path = Path::new(path);

        if !path.exists() {
            info!("No previous session found at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path).context("Failed to read session file")?;

        let session: SessionJson =
            serde_json::from_str(&content).context("Failed to parse session JSON")?;

        info!(
            "Loaded previous session with {} angle inputs",
            session.angle_inputs.len()
        );

        Ok(Some(session))
    }

    /// ファイルにセッションを保存する（同期処理）
    fn save_sync(path: &str, session: &SessionJson) -> Result<()> {
        let path = Path::new(path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create session directory")?;
        }

        let json = serde_json::to_string_pretty(session).context("Failed to serialize session")?;

        fs::write(path, json).context("Failed to write session file")?;

        info!("Saved session to {}", path.display());

        Ok(())
    }

    /// セッションファイルを削除する（同期処理）
    fn clear_sync(path: &str) -> Result<bool> {
        let path = Path::new(path);

        if !path.exists() {
            warn!("No session file to clear at {}", path.display());
            return Ok(false);
        }

        fs::remove_file(path).context("Failed to delete session file")?;
        info!("Deleted session file {}", path.display());

        Ok(true)
    }

    /// JSON形式からDomain形式に変換
    fn to_domain_session(json: SessionJson) -> Session {
        let results = json.results;
        Session {
            angle_inputs: json.angle_inputs,
            result: ComputationResult {
                mean_angle: DegreesMinutes::new(results.phi_bar_deg, results.phi_bar_min),
                std_deviation: DegreesMinutes::new(results.s_phi_deg, results.s_phi_min),
                angular_uncertainty_rad: results.delta_phi_rad,
                mean_spacing_mm: results.d_bar_mm,
                spacing_uncertainty_mm: results.delta_d_mm,
                relative_uncertainty_percent: results.e_d_percent,
                lower_bound_mm: results.d_min_mm,
                upper_bound_mm: results.d_max_mm,
            },
            saved_at: json.saved_at,
        }
    }

    /// Domain形式からJSON形式に変換
    fn from_domain_session(session: &Session) -> SessionJson {
        let result = &session.result;
        SessionJson {
            angle_inputs: session.angle_inputs.clone(),
            results: ResultsJson {
                phi_bar_deg: result.mean_angle.degrees,
                phi_bar_min: result.mean_angle.minutes,
                s_phi_deg: result.std_deviation.degrees,
                s_phi_min: result.std_deviation.minutes,
                delta_phi_rad: result.angular_uncertainty_rad,
                d_bar_mm: result.mean_spacing_mm,
                delta_d_mm: result.spacing_uncertainty_mm,
                e_d_percent: result.relative_uncertainty_percent,
                d_min_mm: result.lower_bound_mm,
                d_max_mm: result.upper_bound_mm,
            },
            saved_at: session.saved_at,
        }
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn load(&self, path: &str) -> Result<Option<Session>> {
        let path = path.to_string();
        let json_session = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(json_session.map(Self::to_domain_session))
    }

    async fn save(&self, path: &str, session: &Session) -> Result<()> {
        let path = path.to_string();
        let json_session = Self::from_domain_session(session);
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &json_session))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(())
    }

    async fn clear(&self, path: &str) -> Result<bool> {
        let path = path.to_string();
        tokio::task::spawn_blocking(move || Self::clear_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for JsonSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}
