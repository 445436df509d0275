//! UI 状态管理
//!
//! 管理与任务数据无关的显示状态：主题、颜色、Toast、主题选择器。

use std::time::{Duration, Instant};

use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 默认显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 打开选择器前的主题（取消时恢复）
    theme_before_preview: Theme,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    pub last_system_dark: bool,
}

impl UiState {
    /// 创建新的 UI 状态
    pub fn new(theme: Theme, colors: ThemeColors, last_system_dark: bool) -> Self {
        Self {
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            theme_before_preview: theme,
            last_system_dark,
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);
    }

    // ========== 主题选择器 ==========

    /// 打开主题选择器，定位到当前主题
    pub fn open_theme_selector(&mut self) {
        self.theme_before_preview = self.theme;
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 选择上一个（实时预览）
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + len - 1) % len;
        self.preview_selected_theme();
    }

    /// 选择下一个（实时预览）
    pub fn theme_selector_next(&mut self) {
        self.theme_selector_index = (self.theme_selector_index + 1) % Theme::all().len();
        self.preview_selected_theme();
    }

    /// 确认选择，返回选中的主题
    pub fn confirm_theme_selector(&mut self) -> Theme {
        self.preview_selected_theme();
        self.show_theme_selector = false;
        self.theme
    }

    /// 取消选择，恢复原主题
    pub fn cancel_theme_selector(&mut self) {
        self.set_theme(self.theme_before_preview);
        self.show_theme_selector = false;
    }

    fn preview_selected_theme(&mut self) {
        if let Some(theme) = Theme::all().get(self.theme_selector_index) {
            self.set_theme(*theme);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(theme: Theme) -> UiState {
        UiState::new(theme, get_theme_colors(theme), false)
    }

    #[test]
    fn test_new_creates_default_state() {
        let state = new_state(Theme::Nord);

        assert!(state.toast.is_none());
        assert_eq!(state.theme, Theme::Nord);
        assert!(!state.show_theme_selector);
        assert_eq!(state.theme_selector_index, 0);
        assert!(!state.last_system_dark);
    }

    #[test]
    fn test_show_toast() {
        let mut state = new_state(Theme::Dark);

        state.show_toast("Added task");
        assert_eq!(state.toast.as_ref().unwrap().message, "Added task");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("Test", Duration::from_millis(1));
        assert!(!toast.is_expired());
        std::thread::sleep(Duration::from_millis(2));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_clear_expired_toast() {
        let mut state = new_state(Theme::Dark);

        state.toast = Some(Toast::new("Test", Duration::from_millis(1)));
        std::thread::sleep(Duration::from_millis(2));
        state.clear_expired_toast();
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_theme_selector_starts_at_current_theme() {
        let mut state = new_state(Theme::Dracula);
        state.open_theme_selector();

        assert!(state.show_theme_selector);
        assert_eq!(Theme::all()[state.theme_selector_index], Theme::Dracula);
    }

    #[test]
    fn test_theme_selector_wraps_and_previews() {
        let mut state = new_state(Theme::Auto);
        state.open_theme_selector();

        state.theme_selector_prev();
        assert_eq!(state.theme, Theme::Gruvbox);

        state.theme_selector_next();
        state.theme_selector_next();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_theme_selector_confirm() {
        let mut state = new_state(Theme::Dark);
        state.open_theme_selector();
        state.theme_selector_next();

        assert_eq!(state.confirm_theme_selector(), Theme::Light);
        assert!(!state.show_theme_selector);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_theme_selector_cancel_restores() {
        let mut state = new_state(Theme::Nord);
        state.open_theme_selector();
        state.theme_selector_next();
        assert_eq!(state.theme, Theme::Gruvbox);

        state.cancel_theme_selector();
        assert!(!state.show_theme_selector);
        assert_eq!(state.theme, Theme::Nord);
    }
}
