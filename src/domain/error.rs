//! # Measurement Errors
//!
//! 計算コアが返す型付きエラー

use thiserror::Error;

/// 期待される角度入力の書式（エラーメッセージ用）
pub const EXPECTED_ANGLE_FORMAT: &str = "degrees°minutes′";

/// 書式の入力例（エラーメッセージ用）
pub const ANGLE_FORMAT_EXAMPLE: &str = "30°15.5′";

/// 計算コアのエラー
///
/// いずれもプロセスにとって致命的ではなく、呼び出し側が入力を修正して再試行できる
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    /// 角度文字列が `度°分′` の書式に一致しない
    #[error(
        "invalid angle format {input:?}: use '{format}', e.g. '{example}'",
        format = EXPECTED_ANGLE_FORMAT,
        example = ANGLE_FORMAT_EXAMPLE
    )]
    InputFormat { input: String },

    /// 測定数が固定のサンプルサイズと一致しない
    #[error("degenerate sample: expected {expected} angle measurements, got {actual}")]
    DegenerateSample { expected: usize, actual: usize },

    /// 平均角度の正弦がゼロで、格子間隔が定義できない
    #[error("sine of the mean angle {mean_degrees}° is zero; grating spacing is undefined")]
    SingularGeometry { mean_degrees: f64 },

    /// 入力は書式どおりだが、桁あふれで格子間隔が有限値にならない
    #[error("{quantity} is not a finite number; check the angle readings for overflow")]
    NonFiniteResult { quantity: &'static str },
}

impl MeasurementError {
    pub(crate) fn input_format(input: &str) -> Self {
        Self::InputFormat {
            input: input.to_string(),
        }
    }
}
