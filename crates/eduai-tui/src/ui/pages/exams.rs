use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use eduai_core::pages::ExamSelectionPage;

use super::{page_block, status_lines};
use crate::ui::styles;

pub fn render(frame: &mut Frame, page: &ExamSelectionPage, area: Rect) {
    let status = status_lines(page.loading, page.error.as_deref());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(status.len() as u16)])
        .split(area);

    let items: Vec<ListItem> = page
        .exams
        .iter()
        .enumerate()
        .map(|(i, exam)| {
            let marker = if page.is_selected(exam) { "(•)" } else { "( )" };
            let style = styles::field_style(i == page.cursor);
            ListItem::new(Line::from(format!(" {} {}", marker, exam.name))).style(style)
        })
        .collect();

    let list = List::new(items).block(page_block("Sınavınızı seçin"));

    let mut state = ListState::default();
    if !page.exams.is_empty() {
        state.select(Some(page.cursor));
    }
    frame.render_stateful_widget(list, chunks[0], &mut state);
    frame.render_widget(Paragraph::new(status), chunks[1]);
}
