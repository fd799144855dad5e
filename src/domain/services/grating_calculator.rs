//! # Grating Calculator
//!
//! 5つの角度文字列から [`ComputationResult`] までの一連の計算
//!
//! 副作用を持たず、いずれかの段階で失敗した時点で計算全体を中断する

use crate::domain::entities::angle::AngleMeasurement;
use crate::domain::entities::computation_result::ComputationResult;
use crate::domain::error::MeasurementError;

use super::result_assembler::ResultAssembler;
use super::statistics::{StatisticsService, SAMPLE_SIZE};
use super::uncertainty::UncertaintyService;

pub struct GratingCalculator;

impl GratingCalculator {
    /// 角度文字列をパースして十進度数の列にする
    ///
    /// # Errors
    ///
    /// 入力数が [`SAMPLE_SIZE`] でない場合は [`MeasurementError::DegenerateSample`]、
    /// 書式が不正な入力があれば最初のものについて [`MeasurementError::InputFormat`] を返す
    pub fn decimal_angles<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<f64>, MeasurementError> {
        if inputs.len() != SAMPLE_SIZE {
            return Err(MeasurementError::DegenerateSample {
                expected: SAMPLE_SIZE,
                actual: inputs.len(),
            });
        }

        inputs
            .iter()
            .map(|input| AngleMeasurement::parse(input.as_ref()).map(|a| a.to_decimal()))
            .collect()
    }

    /// 格子間隔とその不確かさを計算する
    ///
    /// ```
    /// use grating::domain::services::grating_calculator::GratingCalculator;
    ///
    /// let inputs = ["30°15.5′", "30°10.2′", "30°20.7′", "30°15.3′", "30°18.4′"];
    /// let result = GratingCalculator::calculate(&inputs).unwrap();
    ///
    /// assert_eq!(result.mean_angle.degrees, 30);
    /// assert!(result.lower_bound_mm <= result.mean_spacing_mm);
    /// ```
    ///
    /// # Errors
    ///
    /// [`MeasurementError`] のいずれか
    pub fn calculate<S: AsRef<str>>(inputs: &[S]) -> Result<ComputationResult, MeasurementError> {
        let angles = Self::decimal_angles(inputs)?;
        let stats = StatisticsService::sample_statistics(&angles)?;
        let estimate = UncertaintyService::propagate(&stats)?;

        Ok(ResultAssembler::assemble(&stats, &estimate))
    }
}
