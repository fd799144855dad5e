//! Report Formatting
//!
//! 計算結果と前回セッションのテキスト整形

use crate::domain::entities::computation_result::ComputationResult;

/// 計算結果をテキストに整形する
///
/// mm表示は `precision` 桁、角度の分は2桁、ラジアンは6桁、%は2桁
pub fn format_result(result: &ComputationResult, precision: usize) -> String {
    let p = precision;
    [
        format!("Mean angle           φ̄   = {}", result.mean_angle),
        format!("Angle std deviation  S_φ = {}", result.std_deviation),
        format!(
            "Total uncertainty    Δ_φ = {:.6} rad",
            result.angular_uncertainty_rad
        ),
        format!("Mean spacing         d̄   = {:.p$} mm", result.mean_spacing_mm),
        format!(
            "Spacing uncertainty  Δ_d = {:.p$} mm",
            result.spacing_uncertainty_mm
        ),
        format!(
            "Relative uncertainty E_d = {:.2}%",
            result.relative_uncertainty_percent
        ),
        format!(
            "Result               d   = {:.p$} mm ± {:.p$} mm",
            result.mean_spacing_mm, result.spacing_uncertainty_mm
        ),
        format!(
            "Interval                 = [{:.p$}, {:.p$}] mm",
            result.lower_bound_mm, result.upper_bound_mm
        ),
    ]
    .join("\n")
}

/// 角度入力を番号付きで整形する
pub fn format_inputs(angle_inputs: &[String]) -> String {
    angle_inputs
        .iter()
        .enumerate()
        .map(|(i, input)| format!("  #{}: {}", i + 1, input))
        .collect::<Vec<_>>()
        .join("\n")
}
