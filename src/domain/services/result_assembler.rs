//! # Result Assembler
//!
//! 統計量と伝播結果から [`ComputationResult`] を組み立てる

use crate::domain::entities::angle::DegreesMinutes;
use crate::domain::entities::computation_result::ComputationResult;

use super::statistics::SampleStatistics;
use super::uncertainty::SpacingEstimate;

pub struct ResultAssembler;

impl ResultAssembler {
    /// 平均と標準偏差を度・分に戻して結果を組み立てる（失敗しない）
    pub fn assemble(stats: &SampleStatistics, estimate: &SpacingEstimate) -> ComputationResult {
        ComputationResult {
            mean_angle: DegreesMinutes::from_decimal(stats.mean),
            std_deviation: DegreesMinutes::from_decimal(stats.std_deviation),
            angular_uncertainty_rad: estimate.angular_uncertainty_rad,
            mean_spacing_mm: estimate.mean_spacing_mm,
            spacing_uncertainty_mm: estimate.spacing_uncertainty_mm,
            relative_uncertainty_percent: estimate.relative_uncertainty_percent,
            lower_bound_mm: estimate.lower_bound_mm,
            upper_bound_mm: estimate.upper_bound_mm,
        }
    }
}
