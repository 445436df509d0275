//! 应用配置持久化
//!
//! 只保存外观和日志设置；任务数据始终只存在于内存中。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use super::app_dir;
use crate::error::{AppError, Result};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing 过滤级别 (trace/debug/info/warn/error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 是否写入 ~/.todo-tui/logs/todo-tui.log
    #[serde(default = "default_true")]
    pub file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: true,
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}

/// 加载配置（不存在或无法解析时返回默认值）
///
/// 加载时日志尚未初始化，错误随默认配置一起返回，由调用方在日志就绪后记录。
pub fn load_config() -> (Config, Option<AppError>) {
    match config_path() {
        Ok(path) => load_config_or_default(&path),
        Err(e) => (Config::default(), Some(e)),
    }
}

/// 从指定路径加载配置，失败时回退到默认值并带回错误
pub fn load_config_or_default(path: &Path) -> (Config, Option<AppError>) {
    match load_config_from(path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

/// 从指定路径加载配置，文件不存在时返回默认值
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 保存配置到指定路径（自动创建父目录）
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
