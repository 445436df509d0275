//! CLI 模块

use clap::Parser;

use crate::logging::LoggingOverrides;

#[derive(Parser, Debug)]
#[command(name = "todo-tui")]
#[command(version)]
#[command(about = "A keyboard-driven TODO list for the terminal")]
pub struct Cli {
    /// Theme for this run (Auto, Dark, Light, Dracula, Nord, Gruvbox); not saved
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Don't write ~/.todo-tui/logs/todo-tui.log
    #[arg(long)]
    pub no_log_file: bool,
}

impl Cli {
    /// 命令行里的日志覆盖项
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            level: self.log_level.clone(),
            disable_file: self.no_log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["todo-tui", "--theme", "nord", "--log-level", "debug"]);
        assert_eq!(cli.theme.as_deref(), Some("nord"));
        let overrides = cli.logging_overrides();
        assert_eq!(overrides.level.as_deref(), Some("debug"));
        assert!(!overrides.disable_file);
    }

    #[test]
    fn test_parse_no_log_file() {
        let cli = Cli::parse_from(["todo-tui", "--no-log-file"]);
        assert!(cli.theme.is_none());
        assert!(cli.logging_overrides().disable_file);
    }
}
