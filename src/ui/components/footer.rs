use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, focus: Focus, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(focus, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        // 删除键用警示色
        let key_color = if *key == "x" {
            colors.danger
        } else {
            colors.highlight
        };
        spans.push(Span::styled(
            *key,
            Style::default().fg(key_color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(focus: Focus, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Input => vec![
            ("Enter", "add"),
            ("Esc", "clear"),
            ("Tab", "list"),
            ("^C", "quit"),
        ],
        Focus::List if has_items => vec![
            ("Space", "done"),
            ("x", "delete"),
            ("i", "input"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Focus::List => vec![("i", "input"), ("t", "theme"), ("?", "help"), ("q", "quit")],
    }
}
