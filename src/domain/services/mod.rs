//! # Domain Services
//!
//! 測定値から格子間隔を求める純粋な計算パイプライン
//!
//! - **statistics**: 平均と標本標準偏差
//! - **uncertainty**: 不確かさの伝播
//! - **result_assembler**: 結果の組み立て
//! - **grating_calculator**: 文字列入力から結果までの一連の処理

pub mod grating_calculator;
pub mod result_assembler;
pub mod statistics;
pub mod uncertainty;
