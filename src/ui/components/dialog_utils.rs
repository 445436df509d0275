//! Dialog 组件共享工具函数

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::ThemeColors;

/// 按终端列宽截断字符串，超出部分用省略号替代（CJK 等宽字符占 2 列）
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // 预留 1 列给省略号
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// 只保留字符串末尾能放进 `max_width` 列的部分（输入框光标始终可见）
pub fn tail(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut kept = Vec::new();
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }
    let rest: String = kept.into_iter().rev().collect();
    format!("…{}", rest)
}

/// 计算居中 dialog 区域
pub fn center_dialog(frame_area: Rect, width: u16, height: u16) -> Rect {
    let x = frame_area.width.saturating_sub(width) / 2;
    let y = frame_area.height.saturating_sub(height) / 2;
    Rect::new(
        frame_area.x + x,
        frame_area.y + y,
        width.min(frame_area.width),
        height.min(frame_area.height),
    )
}

/// 渲染 dialog 框架（带标题、边框）并返回内部可用区域
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    colors: &ThemeColors,
) -> Rect {
    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 渲染标准提示行，`hints` 格式为 [(快捷键, 描述), ...]
pub fn render_hint(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], colors: &ThemeColors) {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, desc))| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::styled("  ", Style::default().fg(colors.muted)));
            }
            v.push(Span::styled(*key, Style::default().fg(colors.highlight)));
            v.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(colors.muted),
            ));
            v
        })
        .collect();

    let hint = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("Buy milk and eggs", 8), "Buy mil…");
        // 宽字符按 2 列计算
        assert_eq!(truncate("牛乳を買う", 5), "牛乳…");
        assert_eq!(truncate("牛乳を買う", 4), "牛…");
        assert_eq!(truncate("牛乳を買う", 10), "牛乳を買う");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail("short", 10), "short");
        assert_eq!(tail("Buy milk and eggs", 6), "… eggs");
        assert_eq!(tail("abcdef", 4), "…def");
        assert_eq!(tail("abc", 0), "");
        assert_eq!(tail("牛乳を買う", 5), "…買う");
        assert_eq!(tail("牛乳を買う", 6), "…買う");
        assert_eq!(tail("牛乳を買う", 7), "…を買う");
    }

    #[test]
    fn test_center_dialog() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(center_dialog(area, 30, 10), Rect::new(35, 15, 30, 10));

        // 空间不足时收缩到可用区域
        let small = Rect::new(0, 0, 20, 5);
        assert_eq!(center_dialog(small, 30, 10), Rect::new(0, 0, 20, 5));
    }
}
