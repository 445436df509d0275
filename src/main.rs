mod app;
mod cli;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::Cli;
use theme::Theme;

fn main() -> error::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 加载配置并初始化日志（guard 需要一直持有到退出）
    let (config, config_err) = storage::config::load_config();
    let log_guard = match storage::log_dir() {
        Ok(dir) => logging::init(&config.logging, &cli.logging_overrides(), &dir)?,
        Err(e) => {
            eprintln!("File logging disabled: {}", e);
            None
        }
    };
    // 日志就绪后再报告配置错误；未启用文件日志时退回 stderr
    if let Some(e) = config_err {
        if log_guard.is_some() {
            warn!("using default config: {}", e);
        } else {
            eprintln!("Using default config: {}", e);
        }
    }

    // Panic 时先恢复终端，再交给原来的 hook 打印信息
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let theme_override = cli.theme.as_deref().map(Theme::from_name);
    let mut app = App::new(
        config,
        storage::config::config_path().ok(),
        theme_override,
    );
    info!(theme = app.ui.theme.label(), "starting");

    // 初始化终端
    let mut terminal = ratatui::init();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    info!(
        tasks = app.controller.count(),
        completed = app.controller.completed_count(),
        remaining = app.controller.remaining_count(),
        "exiting"
    );
    result
}

/// 主循环：渲染 → 处理一个事件，直到用户退出
fn run(terminal: &mut DefaultTerminal, app: &mut App) -> error::Result<()> {
    loop {
        terminal.draw(|frame| ui::todo::render(frame, app))?;

        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
