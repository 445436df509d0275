use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 标题栏高度：上下各留一行色块
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部标题栏
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let style = Style::default().fg(colors.title_fg).bg(colors.title_bg);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("TODO", style.add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];

    let title = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}
