use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

use super::dialog_utils::truncate;

/// 选择器 + 复选框 + 空格占用的列数
const ROW_PREFIX_WIDTH: usize = 6;

/// 渲染任务列表
///
/// 已完成任务显示删除线并置灰；只有列表聚焦时才高亮选中行。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    focused: bool,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));
    let text_width = (block.inner(area).width as usize).saturating_sub(ROW_PREFIX_WIDTH);

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let (checkbox_style, text_style) = if task.is_completed() {
                (
                    Style::default().fg(colors.done),
                    Style::default()
                        .fg(colors.muted)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                (
                    Style::default().fg(colors.muted),
                    Style::default().fg(colors.text),
                )
            };

            ListItem::new(Line::from(vec![
                Span::styled(task.checkbox(), checkbox_style),
                Span::raw(" "),
                Span::styled(truncate(task.text(), text_width), text_style),
            ]))
        })
        .collect();

    let (symbol, highlight_style) = if focused {
        (
            "❯ ",
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default())
    };

    let list = List::new(items)
        .block(block)
        .highlight_symbol(symbol)
        .highlight_style(highlight_style)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = ListState::default();
    state.select(selected_index);

    frame.render_stateful_widget(list, area, &mut state);
}
