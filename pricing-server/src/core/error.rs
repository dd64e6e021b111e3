use shared::error::AppError;
use thiserror::Error;

/// 服务器启动 / 运行错误
///
/// 请求级别的错误使用 [`AppError`]；这里只覆盖启动和监听阶段。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("价格规则加载失败: {0}")]
    Rules(#[from] AppError),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
