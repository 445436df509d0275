use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus};

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    if event::poll(POLL_TIMEOUT)? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    Ok(!app.should_quit)
}

/// 分发单个按键：全局快捷键 → 弹窗 → 当前焦点
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    // 主题选择器
    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// 输入框焦点
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.delete_char(),

        // 有内容时先清空，再按一次才离开输入框
        KeyCode::Esc => {
            if app.controller.pending_text().is_empty() {
                app.focus_list();
            } else {
                app.clear_input();
            }
        }

        KeyCode::Tab | KeyCode::Down => app.focus_list(),

        // Ctrl+Alt 同时按下是 AltGr 组合出的字符，单独的 Ctrl 或 Alt 是快捷键
        KeyCode::Char(c) if is_text_input(key.modifiers) => {
            app.insert_char(c);
        }

        _ => {}
    }
}

/// 字符键是否应作为文本输入
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    ctrl == alt
}

/// 列表焦点
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 勾选 / 取消勾选
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 删除
        KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),

        // 回到输入框
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Tab => {
            app.focus_input()
        }

        KeyCode::Char('t') | KeyCode::Char('T') => app.open_theme_selector(),
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
        app.show_help = false;
    }
}

fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.theme_selector_next(),
        KeyCode::Char('k') | KeyCode::Up => app.theme_selector_prev(),
        KeyCode::Enter => app.confirm_theme_selector(),
        KeyCode::Esc | KeyCode::Char('q') => app.cancel_theme_selector(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::Config;
    use crate::theme::Theme;

    fn new_app() -> App {
        App::new(Config::default(), None, Some(Theme::Dark))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_enter_submits_typed_text() {
        let mut app = new_app();
        type_line(&mut app, "Buy milk");

        assert_eq!(app.controller.count(), 1);
        assert_eq!(app.controller.tasks()[0].text(), "Buy milk");
        assert_eq!(app.controller.pending_text(), "");
    }

    #[test]
    fn test_letters_in_input_do_not_trigger_shortcuts() {
        let mut app = new_app();
        for c in "quit".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(!app.should_quit);
        assert_eq!(app.controller.pending_text(), "quit");
    }

    #[test]
    fn test_backspace_and_esc_in_input() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.pending_text(), "a");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller.pending_text(), "");
        assert_eq!(app.focus, Focus::Input);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_list_keys_toggle_and_remove() {
        let mut app = new_app();
        type_line(&mut app, "a");
        type_line(&mut app, "b");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);

        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.tasks()[0].is_completed());

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.controller.count(), 1);
        assert_eq!(app.controller.tasks()[0].text(), "b");

        press(&mut app, KeyCode::Delete);
        assert!(app.controller.is_empty());
    }

    #[test]
    fn test_q_quits_from_list_only() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_input() {
        let mut app = new_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert_eq!(app.controller.pending_text(), "");
    }

    #[test]
    fn test_help_panel_swallows_keys() {
        let mut app = new_app();
        type_line(&mut app, "a");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        // 帮助面板打开时不会删除任务
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.controller.count(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_theme_selector_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('t'));
        assert!(app.ui.show_theme_selector);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.ui.theme, Theme::Light);

        press(&mut app, KeyCode::Esc);
        assert!(!app.ui.show_theme_selector);
        assert_eq!(app.ui.theme, Theme::Dark);
    }

    #[test]
    fn test_altgr_characters_are_typed() {
        let mut app = new_app();
        // AltGr 在 Windows 等平台上报告为 Ctrl+Alt
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('@'), altgr));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('€'), altgr));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(app.controller.pending_text(), "@€A");
    }

    #[test]
    fn test_lone_ctrl_or_alt_chars_are_not_typed() {
        let mut app = new_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        assert_eq!(app.controller.pending_text(), "");
        assert!(!app.should_quit);
    }
}
