pub mod config;

use std::path::PathBuf;

use crate::error::{AppError, Result};

/// 应用目录名（位于用户 home 下）
const APP_DIR_NAME: &str = ".todo-tui";

/// 获取 ~/.todo-tui/ 目录路径
pub fn app_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(APP_DIR_NAME))
        .ok_or_else(|| AppError::config("cannot find home directory"))
}

/// 日志目录: ~/.todo-tui/logs/
pub fn log_dir() -> Result<PathBuf> {
    Ok(app_dir()?.join("logs"))
}
