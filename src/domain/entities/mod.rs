//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **AngleMeasurement**: `度°分′` 形式の角度測定値
//! - **DegreesMinutes**: 十進度数を度・分に戻した表現
//! - **ComputationResult**: 1回の計算結果（不変）

pub mod angle;
pub mod computation_result;
