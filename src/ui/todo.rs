//! TODO 页面渲染
//!
//! 每帧从控制器拉取快照，渲染层本身不持有任务数据。

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, Focus};

use super::components::{
    empty_state, footer, header, help_panel, input_bar, summary, task_list, theme_selector, toast,
};

/// 卡片最大宽度
const CARD_MAX_WIDTH: u16 = 72;

/// 渲染 TODO 页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.ui.colors;
    let controller = &app.controller;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let card = card_area(area);

    // 有任务时才显示统计行
    let summary_height = if controller.is_empty() { 0 } else { 1 };
    let [header_area, input_area, list_area, summary_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(input_bar::INPUT_BAR_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(summary_height),
        Constraint::Length(3),
    ])
    .areas(card);

    header::render(frame, header_area, colors);

    input_bar::render(
        frame,
        input_area,
        controller.pending_text(),
        app.focus == Focus::Input,
        colors,
    );

    if controller.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        task_list::render(
            frame,
            list_area,
            controller.tasks(),
            app.list_state.selected(),
            app.focus == Focus::List,
            colors,
        );
        summary::render(
            frame,
            summary_area,
            controller.count(),
            controller.completed_count(),
            colors,
        );
    }

    footer::render(frame, footer_area, app.focus, !controller.is_empty(), colors);

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.ui.show_theme_selector {
        theme_selector::render(frame, app.ui.theme_selector_index, colors);
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, colors);
    }
}

/// 水平居中的卡片区域
fn card_area(area: Rect) -> Rect {
    let [card] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    card
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::storage::config::Config;
    use crate::theme::Theme;

    fn new_app() -> App {
        App::new(Config::default(), None, Some(Theme::Dark))
    }

    fn add(app: &mut App, text: &str) {
        app.controller.set_pending_text(text);
        app.submit();
    }

    /// 渲染一帧并把 buffer 按行转成字符串
    fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_empty_list_shows_placeholder_and_no_summary() {
        let app = new_app();
        let lines = draw(&app, 80, 24);

        assert!(contains(&lines, "TODO"));
        assert!(contains(&lines, "No tasks yet. Add a new task to get started."));
        assert!(!contains(&lines, "Total:"));
    }

    #[test]
    fn test_tasks_and_summary_are_rendered() {
        let mut app = new_app();
        add(&mut app, "Buy milk");
        add(&mut app, "Walk dog");
        app.list_state.select(Some(0));
        app.toggle_selected();
        app.ui.toast = None;

        let lines = draw(&app, 80, 24);
        assert!(contains(&lines, "[x] Buy milk"));
        assert!(contains(&lines, "[ ] Walk dog"));
        assert!(contains(&lines, "Total: 2 tasks"));
        assert!(contains(&lines, "Completed: 1 task"));
    }

    #[test]
    fn test_placeholder_visible_when_input_empty() {
        // 启动时输入框已聚焦，占位文字也应可见
        let mut app = new_app();
        let lines = draw(&app, 80, 24);
        assert!(contains(&lines, "█Enter a new task..."));

        app.focus_list();
        let lines = draw(&app, 80, 24);
        assert!(contains(&lines, "Enter a new task..."));
        assert!(!contains(&lines, "█"));

        app.focus_input();
        app.insert_char('B');
        let lines = draw(&app, 80, 24);
        assert!(!contains(&lines, "Enter a new task..."));
        assert!(contains(&lines, "B█"));
    }

    #[test]
    fn test_cursor_visible_with_wide_input() {
        let mut app = new_app();
        app.controller.set_pending_text("牛乳を買う".repeat(7));
        let lines = draw(&app, 80, 24);

        // 宽字符的第二列在 buffer 中是空格
        assert!(contains(&lines, "う █"));
        assert!(contains(&lines, "…"));
    }

    #[test]
    fn test_toast_fits_wide_text() {
        let mut app = new_app();
        add(&mut app, "牛乳を買う");
        app.list_state.select(Some(0));
        app.toggle_selected();

        let lines = draw(&app, 80, 24);
        assert!(contains(&lines, "Completed: 牛 乳 を 買 う"));
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        let mut app = new_app();
        add(&mut app, "A task with a fairly long description that will not fit");
        app.show_help = true;
        // 只要不 panic 即可
        draw(&app, 10, 5);
    }
}
