//! 系统主题检测（Auto 主题使用）

use std::process::Command;

/// 检测系统是否为深色模式
///
/// macOS 读取 `AppleInterfaceStyle`；其他平台退回到终端的 `COLORFGBG` 约定。
/// 都无法判断时按浅色处理。
pub fn detect_system_theme() -> bool {
    if cfg!(target_os = "macos") {
        return macos_dark_mode();
    }
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| colorfgbg_is_dark(&value))
        .unwrap_or(false)
}

fn macos_dark_mode() -> bool {
    // AppleInterfaceStyle 不存在时命令失败，即浅色模式
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

/// 解析 `COLORFGBG`（形如 "15;0" 或 "0;default;15"），最后一段是背景色号。
/// 背景色号 0-6 或 8 视为深色。
fn colorfgbg_is_dark(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
