//! # Uncertainty Service
//!
//! 角度の不確かさを格子間隔 d = λ / sin φ へ一次の誤差伝播で伝える

use crate::domain::error::MeasurementError;

use super::statistics::SampleStatistics;

/// 光源の波長 λ（nm）
pub const WAVELENGTH_NM: f64 = 546.1;

/// 分光計の機器不確かさ（度）。1分角
pub const INSTRUMENT_UNCERTAINTY_DEG: f64 = 1.0 / 60.0;

const NM_PER_MM: f64 = 1e6;

/// 伝播後の格子間隔の推定値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingEstimate {
    /// 全角度不確かさ Δ_φ（ラジアン）
    pub angular_uncertainty_rad: f64,
    /// 平均格子間隔 d̄（mm）
    pub mean_spacing_mm: f64,
    /// 格子間隔の不確かさ Δ_d（mm）。常に非負
    pub spacing_uncertainty_mm: f64,
    /// 相対不確かさ E_d（%）
    pub relative_uncertainty_percent: f64,
    pub lower_bound_mm: f64,
    pub upper_bound_mm: f64,
}

/// 不確かさ伝播サービス
pub struct UncertaintyService;

impl UncertaintyService {
    /// 統計的なばらつきと機器不確かさを二乗和で合成する（度）
    pub fn total_angular_uncertainty(std_deviation_deg: f64) -> f64 {
        std_deviation_deg.hypot(INSTRUMENT_UNCERTAINTY_DEG)
    }

    /// 平均角度と標準偏差から格子間隔とその不確かさを求める
    ///
    /// Δ_d = |λ cos φ̄ / sin² φ̄| · Δ_φ
    ///
    /// # Errors
    ///
    /// 平均角度が180°の整数倍（sin φ̄ = 0）の場合に
    /// [`MeasurementError::SingularGeometry`] を、
    /// 途中の値が桁あふれした場合に [`MeasurementError::NonFiniteResult`] を返す
    pub fn propagate(stats: &SampleStatistics) -> Result<SpacingEstimate, MeasurementError> {
        if !stats.mean.is_finite() {
            return Err(MeasurementError::NonFiniteResult {
                quantity: "mean angle",
            });
        }

        let angular_uncertainty_rad =
            Self::total_angular_uncertainty(stats.std_deviation).to_radians();
        if !angular_uncertainty_rad.is_finite() {
            return Err(MeasurementError::NonFiniteResult {
                quantity: "total angular uncertainty",
            });
        }

        let mean_rad = stats.mean.to_radians();
        let sin_mean = mean_rad.sin();
        // sin(π) does not round to exactly zero in f64
        if sin_mean == 0.0 || stats.mean % 180.0 == 0.0 {
            return Err(MeasurementError::SingularGeometry {
                mean_degrees: stats.mean,
            });
        }

        let mean_spacing_mm = WAVELENGTH_NM / sin_mean / NM_PER_MM;
        let spacing_uncertainty_mm =
            (WAVELENGTH_NM * mean_rad.cos() / sin_mean.powi(2) * angular_uncertainty_rad).abs()
                / NM_PER_MM;
        let relative_uncertainty_percent = 100.0 * spacing_uncertainty_mm / mean_spacing_mm;

        let estimate = SpacingEstimate {
            angular_uncertainty_rad,
            mean_spacing_mm,
            spacing_uncertainty_mm,
            relative_uncertainty_percent,
            lower_bound_mm: mean_spacing_mm - spacing_uncertainty_mm,
            upper_bound_mm: mean_spacing_mm + spacing_uncertainty_mm,
        };
        estimate.ensure_finite()?;

        Ok(estimate)
    }
}

impl SpacingEstimate {
    /// NaN や無限大を含む推定値を成功扱いにしない
    fn ensure_finite(&self) -> Result<(), MeasurementError> {
        let quantities = [
            ("mean grating spacing", self.mean_spacing_mm),
            ("spacing uncertainty", self.spacing_uncertainty_mm),
            ("relative uncertainty", self.relative_uncertainty_percent),
            ("lower bound", self.lower_bound_mm),
            ("upper bound", self.upper_bound_mm),
        ];

        match quantities.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((quantity, _)) => Err(MeasurementError::NonFiniteResult { quantity }),
            None => Ok(()),
        }
    }
}
