//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] / [`ApiResponse`] - 统一错误与响应 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`validation`] - 请求参数校验

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
