//! 新任务输入框

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::tail;

/// 输入框高度（含边框）
pub const INPUT_BAR_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "Enter a new task...";
const ADD_BUTTON: &str = "[ + ]";

/// 渲染输入框：为空时显示占位文字，聚焦时显示光标
pub fn render(frame: &mut Frame, area: Rect, input: &str, focused: bool, colors: &ThemeColors) {
    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(" New task ")
        .title_style(Style::default().fg(border_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, button_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(ADD_BUTTON.len() as u16 + 1),
    ])
    .areas(inner_area);

    // 预留 1 列给前导空格，1 列给光标（按终端列宽计算）
    let visible_width = (text_area.width as usize).saturating_sub(2);

    let mut spans = vec![Span::raw(" ")];
    if !input.is_empty() {
        spans.push(Span::styled(
            tail(input, visible_width),
            Style::default().fg(colors.text),
        ));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }
    // 为空时无论是否聚焦都显示占位文字
    if input.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), text_area);

    // 输入为空白时按钮置灰（提交会被忽略）
    let button_style = if input.trim().is_empty() {
        Style::default().fg(colors.muted)
    } else {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(ADD_BUTTON, button_style)),
        button_area,
    );
}
