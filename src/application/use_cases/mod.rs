//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ComputeSpacingUseCase**: 格子間隔の計算とセッション保存
//! - **LoadSessionUseCase**: 前回セッションの読み込み
//! - **ClearSessionUseCase**: 保存済みセッションの削除

pub mod clear_session;
pub mod compute_spacing;
pub mod load_session;
