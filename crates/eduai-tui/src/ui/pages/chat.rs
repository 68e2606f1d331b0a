use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use eduai_core::i18n;
use eduai_core::pages::{ChatMessage, ChatPage, ChatRole};
use eduai_core::utils::Segment;

use super::{input_line, muted_line, page_block, status_lines};
use crate::ui::styles;

pub fn render(frame: &mut Frame, page: &ChatPage, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(area);

    let mut lines = Vec::new();
    if page.messages.is_empty() {
        lines.push(muted_line(i18n::CHAT_EMPTY));
    }
    for message in &page.messages {
        lines.push(message_line(message));
    }

    // Stick to the newest messages
    let visible = chunks[0].height.saturating_sub(2);
    let scroll = (lines.len() as u16).saturating_sub(visible);
    let history = Paragraph::new(lines)
        .block(page_block("AI Sohbet"))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(history, chunks[0]);

    let mut input = vec![input_line("Mesaj:", &page.input, !page.loading, false)];
    input.extend(status_lines(page.loading, page.error.as_deref()));
    frame.render_widget(Paragraph::new(input), chunks[1]);
}

fn message_line(message: &ChatMessage) -> Line<'static> {
    let who = match message.role {
        ChatRole::User => "Sen: ",
        ChatRole::Ai => "AI: ",
    };
    let mut spans = vec![Span::styled(who, styles::speaker_style(message.role))];
    for segment in message.segments() {
        spans.push(match segment {
            Segment::Text(text) => Span::raw(text),
            Segment::Link(url) => Span::styled(url, styles::link_style()),
        });
    }
    Line::from(spans)
}
