//! todo-tui 统一错误类型定义
//!
//! 任务列表本身不会失败（空输入、失效 ID 都是 no-op），
//! 这里只覆盖终端、配置文件和日志初始化这些外围错误。

use std::io;
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O 错误（终端、配置文件读写等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 日志初始化错误
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 Logging 错误
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
