//! # Data Transfer Objects

pub mod session_config;
