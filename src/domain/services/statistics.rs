//! # Statistics Service
//!
//! 角度測定値の平均と標本標準偏差

use crate::domain::error::MeasurementError;

/// 1回の計算に使う測定数
pub const SAMPLE_SIZE: usize = 5;

// n - 1 で割るため2以上が必要
const _: () = assert!(SAMPLE_SIZE >= 2);

/// 十進度数の標本に対する統計量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    /// 算術平均（度）
    pub mean: f64,
    /// ベッセル補正した標本標準偏差（度）
    pub std_deviation: f64,
}

/// 統計サービス
pub struct StatisticsService;

impl StatisticsService {
    /// 平均と標本標準偏差を計算する
    ///
    /// 分散は n ではなく n - 1 で割る
    ///
    /// # Errors
    ///
    /// 値の数が [`SAMPLE_SIZE`] でない場合に [`MeasurementError::DegenerateSample`] を返す
    pub fn sample_statistics(values: &[f64]) -> Result<SampleStatistics, MeasurementError> {
        if values.len() != SAMPLE_SIZE {
            return Err(MeasurementError::DegenerateSample {
                expected: SAMPLE_SIZE,
                actual: values.len(),
            });
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let sum_of_squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        let std_deviation = (sum_of_squares / (n - 1.0)).sqrt();

        Ok(SampleStatistics {
            mean,
            std_deviation,
        })
    }
}
