use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::truncate;

/// 在屏幕底部居中显示 Toast 消息（位于 footer 上方）
pub fn render(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    let area = frame.area();
    let toast_height = 3u16;
    if area.width < 8 || area.height < toast_height + 3 {
        return;
    }

    // 计算 Toast 尺寸和位置
    let max_text = area.width as usize - 8;
    let message = Span::raw(truncate(message, max_text));
    let toast_width = (message.width() + 6) as u16;
    let toast_x = area.x + (area.width - toast_width) / 2;
    let toast_y = area.y + area.height - toast_height - 3;

    let toast_area = Rect::new(toast_x, toast_y, toast_width, toast_height);

    // 清除背景
    frame.render_widget(Clear, toast_area);

    let toast = Paragraph::new(message)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.info))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(toast, toast_area);
}
