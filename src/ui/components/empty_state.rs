use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

const MESSAGE: &str = "No tasks yet. Add a new task to get started.";

/// 渲染空状态
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(MESSAGE, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Type and press ", Style::default().fg(colors.text)),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add it", Style::default().fg(colors.text)),
        ]),
    ];

    // 垂直居中
    let height = lines.len() as u16;
    let y_offset = inner_area.height.saturating_sub(height) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: height.min(inner_area.height),
    };

    let hint = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hint, centered_area);
}
