//! # Domain Layer
//!
//! 回折格子の格子間隔を求める計算の核心部分
//!
//! ## 特徴
//!
//! - 外部依存を持たない（ファイルI/Oや非同期処理を含まない）
//! - 同じ入力に対して常に同じ結果を返す純粋な計算
//! - 失敗は [`error::MeasurementError`] として型付きで返す
//!
//! ## 構成要素
//!
//! - **entities**: 角度と計算結果のバリューオブジェクト
//! - **error**: 計算コアのエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: 統計・不確かさ伝播・結果の組み立て

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
