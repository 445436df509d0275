//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame};

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 40;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let lines = build_help_lines(colors);

    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, lines.len() as u16 + 2);
    let inner_area = render_dialog_frame(frame, panel_area, " Help ", colors.highlight, colors);

    frame.render_widget(Paragraph::new(lines), inner_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        // Input 分组
        section_header("Input", colors),
        key_line("Enter", "Add task", colors),
        key_line("Backspace", "Delete character", colors),
        key_line("Esc", "Clear / go to list", colors),
        key_line("Tab", "Go to list", colors),
        Line::from(""),
        // List 分组
        section_header("List", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("Space", "Toggle done", colors),
        key_line("x / Del", "Delete task", colors),
        key_line("i / Tab", "Go to input", colors),
        Line::from(""),
        // Other 分组
        section_header("Other", colors),
        key_line("t", "Theme", colors),
        key_line("?", "Toggle help", colors),
        key_line("q (list) / Ctrl+C", "Quit", colors),
    ]
}

/// 分组标题
fn section_header(title: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

/// 快捷键行
fn key_line(key: &str, desc: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {:<18}", key), Style::default().fg(colors.text)),
        Span::styled(desc.to_string(), Style::default().fg(colors.muted)),
    ])
}
