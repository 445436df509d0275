use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;
use tracing::{info, warn};

use crate::model::{Task, TaskId, TaskListController};
use crate::storage::config::{self, Config};
use crate::theme::{detect_system_theme, get_theme_colors, Theme};
use crate::ui_state::UiState;

/// Auto 主题下检测系统外观的间隔
const SYSTEM_THEME_CHECK_INTERVAL: Duration = Duration::from_secs(2);

/// 键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 输入框：按键写入待提交文本
    #[default]
    Input,
    /// 任务列表：按键用于导航、勾选、删除
    List,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务数据（唯一持有者）
    pub controller: TaskListController,
    /// 当前焦点
    pub focus: Focus,
    /// 列表选择状态
    pub list_state: ListState,
    /// 主题 / Toast 等显示状态
    pub ui: UiState,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 当前配置（主题选择后回写）
    config: Config,
    /// 配置文件路径，None 表示不回写
    config_path: Option<PathBuf>,
    /// 上次检测系统主题的时间
    last_theme_check: Instant,
}

impl App {
    /// 创建应用
    ///
    /// `theme_override` 来自 `--theme`，只影响本次运行。
    pub fn new(config: Config, config_path: Option<PathBuf>, theme_override: Option<Theme>) -> Self {
        let theme = theme_override.unwrap_or_else(|| Theme::from_name(&config.theme.name));
        let last_system_dark = detect_system_theme();

        Self {
            should_quit: false,
            controller: TaskListController::new(),
            focus: Focus::Input,
            list_state: ListState::default(),
            ui: UiState::new(theme, get_theme_colors(theme), last_system_dark),
            show_help: false,
            config,
            config_path,
            last_theme_check: Instant::now(),
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ========== 输入框 ==========

    /// 在待提交文本末尾追加字符
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.controller.pending_text().to_string();
        text.push(c);
        self.controller.set_pending_text(text);
    }

    /// 删除待提交文本的最后一个字符
    pub fn delete_char(&mut self) {
        let mut text = self.controller.pending_text().to_string();
        if text.pop().is_some() {
            self.controller.set_pending_text(text);
        }
    }

    /// 清空待提交文本
    pub fn clear_input(&mut self) {
        self.controller.set_pending_text("");
    }

    /// 提交输入；空白输入静默忽略
    pub fn submit(&mut self) {
        if let Some(id) = self.controller.submit_pending() {
            self.list_state.select(self.controller.position(id));
            self.ui.show_toast("Added task");
        }
    }

    // ========== 列表操作 ==========

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        self.list_state
            .selected()
            .and_then(|i| self.controller.tasks().get(i))
    }

    fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(Task::id)
    }

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if !self.controller.toggle_completed(id) {
            return;
        }
        if let Some(task) = self.controller.get(id) {
            let verb = if task.is_completed() {
                "Completed"
            } else {
                "Reopened"
            };
            let message = format!("{}: {}", verb, task.text().trim());
            self.ui.show_toast(message);
        }
    }

    /// 删除选中任务，选中项停留在原位置（越界时退到最后一项）
    pub fn remove_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        if self.controller.remove(task.id()) {
            self.ui.show_toast(format!("Removed: {}", task.text().trim()));
        }
        self.ensure_selection();
    }

    /// 选中下一项（循环）
    pub fn select_next(&mut self) {
        let len = self.controller.count();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self) {
        let len = self.controller.count();
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    /// 保证选中项有效：空列表无选中，越界时退到最后一项
    pub fn ensure_selection(&mut self) {
        let len = self.controller.count();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let selected = self.list_state.selected().unwrap_or(0).min(len - 1);
        self.list_state.select(Some(selected));
    }

    // ========== 焦点 ==========

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.ensure_selection();
    }

    pub fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Input => self.focus_list(),
            Focus::List => self.focus_input(),
        }
    }

    // ========== 主题 ==========

    pub fn open_theme_selector(&mut self) {
        self.ui.open_theme_selector();
    }

    pub fn theme_selector_prev(&mut self) {
        self.ui.theme_selector_prev();
    }

    pub fn theme_selector_next(&mut self) {
        self.ui.theme_selector_next();
    }

    pub fn cancel_theme_selector(&mut self) {
        self.ui.cancel_theme_selector();
    }

    /// 确认主题并写回配置文件
    pub fn confirm_theme_selector(&mut self) {
        let theme = self.ui.confirm_theme_selector();
        info!(theme = theme.label(), "theme changed");
        self.ui.show_toast(format!("Theme: {}", theme.label()));

        self.config.theme.name = theme.label().to_string();
        if let Some(ref path) = self.config_path {
            if let Err(e) = config::save_config_to(path, &self.config) {
                warn!(path = %path.display(), "failed to save config: {}", e);
            }
        }
    }

    /// Auto 主题下跟随系统外观变化
    pub fn check_system_theme(&mut self) {
        if self.ui.theme != Theme::Auto
            || self.last_theme_check.elapsed() < SYSTEM_THEME_CHECK_INTERVAL
        {
            return;
        }
        self.last_theme_check = Instant::now();

        let is_dark = detect_system_theme();
        if is_dark != self.ui.last_system_dark {
            self.ui.last_system_dark = is_dark;
            self.ui.set_theme(Theme::Auto);
        }
    }

    /// 更新 Toast 状态
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }
}

// ============================================================================
// Tests
// ============================================================================
