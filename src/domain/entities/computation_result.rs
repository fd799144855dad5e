//! # ComputationResult Entity
//!
//! 格子間隔の計算結果

use super::angle::DegreesMinutes;

/// 1回の計算で得られる結果
///
/// 計算が成功したときに一度だけ作られ、呼び出し側（表示層）が所有する。
/// 全角度不確かさのみラジアンで保持し、平均角度と標準偏差は度・分で保持する
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    /// 平均角度 φ̄
    pub mean_angle: DegreesMinutes,
    /// 角度の標本標準偏差 S_φ
    pub std_deviation: DegreesMinutes,
    /// 全角度不確かさ Δ_φ（ラジアン）
    pub angular_uncertainty_rad: f64,
    /// 平均格子間隔 d̄（mm）
    pub mean_spacing_mm: f64,
    /// 格子間隔の不確かさ Δ_d（mm）
    pub spacing_uncertainty_mm: f64,
    /// 相対不確かさ E_d（%）
    pub relative_uncertainty_percent: f64,
    /// d̄ − Δ_d（mm）
    pub lower_bound_mm: f64,
    /// d̄ + Δ_d（mm）
    pub upper_bound_mm: f64,
}
