//! 列表底部统计行：左侧总数，右侧完成数

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// "1 task" / "3 tasks"
pub fn task_label(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", n)
    }
}

/// 渲染统计行（列表为空时不调用）
pub fn render(frame: &mut Frame, area: Rect, total: usize, completed: usize, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        format!(" Total: {}", task_label(total)),
        Style::default().fg(colors.muted),
    );
    let right = Span::styled(
        format!("Completed: {} ", task_label(completed)),
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let used_width = left.width() + right.width();
    let padding = " ".repeat((inner_area.width as usize).saturating_sub(used_width));

    let line = Line::from(vec![left, Span::raw(padding), right]);
    frame.render_widget(Paragraph::new(line), inner_area);
}
