//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),  // 灰色
        border: Color::Rgb(68, 68, 68),    // 深灰边框
        done: Color::Rgb(0, 255, 136),     // 绿色
        danger: Color::Rgb(255, 85, 85),   // 红色
        info: Color::Rgb(100, 181, 246),   // 蓝色
        title_fg: Color::White,
        title_bg: Color::Rgb(37, 99, 235), // 蓝色标题栏
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        highlight: Color::Rgb(37, 99, 235),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(0, 150, 80),
        danger: Color::Rgb(220, 38, 38),
        info: Color::Rgb(33, 150, 243),
        title_fg: Color::White,
        title_bg: Color::Rgb(37, 99, 235),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        bg_secondary: Color::Rgb(68, 71, 90), // 选中行
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),      // 前景色
        muted: Color::Rgb(98, 114, 164),      // 注释色
        border: Color::Rgb(68, 71, 90),
        done: Color::Rgb(80, 250, 123),   // 绿色
        danger: Color::Rgb(255, 85, 85),  // 红色
        info: Color::Rgb(139, 233, 253),  // cyan
        title_fg: Color::Rgb(40, 42, 54),
        title_bg: Color::Rgb(189, 147, 249), // 紫色
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        highlight: Color::Rgb(129, 161, 193), // frost darker
        text: Color::Rgb(236, 239, 244),      // snow storm
        muted: Color::Rgb(76, 86, 106),
        border: Color::Rgb(59, 66, 82),
        done: Color::Rgb(163, 190, 140),  // aurora green
        danger: Color::Rgb(191, 97, 106), // aurora red
        info: Color::Rgb(136, 192, 208),  // frost
        title_fg: Color::Rgb(46, 52, 64),
        title_bg: Color::Rgb(136, 192, 208),
    }
}

/// Gruvbox 主题
pub fn gruvbox_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 40, 40),           // bg0
        bg_secondary: Color::Rgb(60, 56, 54), // bg1
        highlight: Color::Rgb(254, 128, 25),  // orange
        text: Color::Rgb(235, 219, 178),      // fg
        muted: Color::Rgb(146, 131, 116),     // gray
        border: Color::Rgb(80, 73, 69),
        done: Color::Rgb(184, 187, 38),   // green
        danger: Color::Rgb(251, 73, 52),  // red
        info: Color::Rgb(131, 165, 152),  // aqua
        title_fg: Color::Rgb(40, 40, 40),
        title_bg: Color::Rgb(250, 189, 47), // yellow
    }
}
