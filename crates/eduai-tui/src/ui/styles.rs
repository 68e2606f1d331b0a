//! Colors and styles shared by the page renderers.

use ratatui::style::{Color, Modifier, Style};

use eduai_core::pages::ChatRole;

// Palette
pub const BRAND: Color = Color::Rgb(94, 106, 210);
pub const TUTOR: Color = Color::Rgb(64, 170, 160);
pub const ACCENT: Color = Color::Rgb(230, 170, 70);
pub const CORRECT: Color = Color::Rgb(90, 180, 100);
pub const WRONG: Color = Color::Rgb(215, 80, 80);
pub const MUTED: Color = Color::Rgb(120, 124, 135);
pub const FOCUS_BG: Color = Color::Rgb(40, 44, 70);
pub const BAR_BG: Color = Color::Rgb(28, 30, 46);

pub fn title_style() -> Style {
    Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn error_style() -> Style {
    Style::default().fg(WRONG)
}

pub fn link_style() -> Style {
    Style::default().fg(BRAND).add_modifier(Modifier::UNDERLINED)
}

pub fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused { BRAND } else { MUTED })
}

/// Form fields, list rows and quiz prompts: focused rows get a background.
pub fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().bg(FOCUS_BG).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn nav_item_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(BRAND)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        muted_style()
    }
}

/// Mark column of the mini test result table.
pub fn mark_style(correct: bool) -> Style {
    let color = if correct { CORRECT } else { WRONG };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn speaker_style(role: ChatRole) -> Style {
    match role {
        ChatRole::User => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ChatRole::Ai => Style::default().fg(TUTOR).add_modifier(Modifier::BOLD),
    }
}

/// Transient status messages such as "logged out".
pub fn notice_style() -> Style {
    Style::default().fg(CORRECT)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(BAR_BG).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}
