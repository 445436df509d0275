//! 日志初始化
//!
//! TUI 占用了终端，日志只写文件：~/.todo-tui/logs/todo-tui.log。
//! 过滤优先级：RUST_LOG > --log-level > config.toml 的 `[logging].level`。

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, Result};
use crate::storage::config::LoggingConfig;

/// 日志文件名
pub const LOG_FILE_NAME: &str = "todo-tui.log";

/// 命令行对日志配置的覆盖
#[derive(Debug, Clone, Default)]
pub struct LoggingOverrides {
    pub level: Option<String>,
    pub disable_file: bool,
}

/// 生成默认过滤指令（只记录本 crate 的事件）
pub fn default_directive(level: &str) -> String {
    format!("todo_tui={}", level.trim().to_ascii_lowercase())
}

/// 合并配置与命令行覆盖，得到最终生效的级别
pub fn effective_level<'a>(config: &'a LoggingConfig, overrides: &'a LoggingOverrides) -> &'a str {
    overrides.level.as_deref().unwrap_or(&config.level)
}

/// 初始化 tracing
///
/// 关闭文件日志时不安装 subscriber，所有事件直接丢弃。
/// 返回的 guard 必须在 main 中一直持有，drop 时才会 flush。
pub fn init(
    config: &LoggingConfig,
    overrides: &LoggingOverrides,
    log_dir: &Path,
) -> Result<Option<WorkerGuard>> {
    if !config.file || overrides.disable_file {
        return Ok(None);
    }

    let directive = default_directive(effective_level(config, overrides));
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .map_err(|e| AppError::logging(format!("invalid log level '{}': {}", directive, e)))?;

    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("info"), "todo_tui=info");
        assert_eq!(default_directive(" DEBUG "), "todo_tui=debug");
    }

    #[test]
    fn test_cli_level_overrides_config() {
        let config = LoggingConfig::default();
        let none = LoggingOverrides::default();
        assert_eq!(effective_level(&config, &none), "info");

        let cli = LoggingOverrides {
            level: Some("trace".to_string()),
            disable_file: false,
        };
        assert_eq!(effective_level(&config, &cli), "trace");
    }

    #[test]
    fn test_disabled_file_installs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let config = LoggingConfig {
            level: "info".to_string(),
            file: false,
        };
        let guard = init(&config, &LoggingOverrides::default(), &log_dir).unwrap();
        assert!(guard.is_none());
        assert!(!log_dir.exists());

        let overrides = LoggingOverrides {
            level: None,
            disable_file: true,
        };
        let guard = init(&LoggingConfig::default(), &overrides, &log_dir).unwrap();
        assert!(guard.is_none());
    }
}
