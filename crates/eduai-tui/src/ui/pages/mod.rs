//! Per-page content rendering.

pub mod auth;
pub mod chat;
pub mod exams;
pub mod overview;
pub mod questionnaire;
pub mod weekly_plan;

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders},
};

use eduai_core::i18n;

use super::styles;

/// Bordered block with a styled title.
fn page_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
}

/// Loading indicator and error line, when present.
fn status_lines(loading: bool, error: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if loading {
        lines.push(Line::from(Span::styled(i18n::LOADING, styles::highlight_style())));
    }
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            styles::error_style(),
        )));
    }
    lines
}

/// A labelled single-line input, `[value▌]`.
fn input_line(label: &str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "▌" } else { "" };
    Line::from(vec![
        Span::styled(format!("  {:<14}[", label), styles::muted_style()),
        Span::styled(format!("{}{}", shown, cursor), styles::field_style(focused)),
        Span::styled("]", styles::muted_style()),
    ])
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), styles::highlight_style()))
}

fn muted_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(format!("  {}", text), styles::muted_style()))
}
