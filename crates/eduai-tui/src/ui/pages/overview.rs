use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use eduai_core::i18n;
use eduai_core::pages::{interaction_line, questionnaire_lines, Overview, OverviewKind, OverviewPage};

use super::{muted_line, page_block, section_title, status_lines};
use crate::ui::styles;

pub fn render(frame: &mut Frame, page: &OverviewPage, area: Rect) {
    let title = match page.kind {
        OverviewKind::Dashboard => "Panel",
        OverviewKind::Profile => "Profil",
    };

    let mut lines = status_lines(page.loading, page.error.as_deref());
    if let Some(data) = &page.data {
        match page.kind {
            OverviewKind::Dashboard => dashboard_lines(data, &mut lines),
            OverviewKind::Profile => profile_lines(data, &mut lines),
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(page_block(title))
        .wrap(Wrap { trim: false })
        .scroll((page.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn dashboard_lines(data: &Overview, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        format!("Hoş geldin, {}!", data.profile.name),
        styles::title_style(),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Seçili sınavlar"));
    match data.exams_display() {
        Some(exams) => lines.push(Line::from(format!("  {}", exams))),
        None => lines.push(muted_line(&format!("{} [e] Sınav seç", i18n::NO_EXAMS_SELECTED))),
    }
    lines.push(Line::from(""));

    lines.push(section_title("Son anket"));
    match &data.profile.questionnaire {
        Some(q) => lines.extend(questionnaire_lines(q).into_iter().map(|l| Line::from(format!("  {}", l)))),
        None => lines.push(muted_line(&format!("{} [a] Anketi doldur", i18n::NO_QUESTIONNAIRE))),
    }
    lines.push(Line::from(""));

    progress_lines(data, lines);
    history_lines(data, lines);

    lines.push(section_title("Hızlı bağlantılar"));
    lines.push(Line::from(vec![
        Span::styled("  [m]", styles::help_key_style()),
        Span::raw(" Mini Test   "),
        Span::styled("[w]", styles::help_key_style()),
        Span::raw(" Haftalık Plan   "),
        Span::styled("[p]", styles::help_key_style()),
        Span::raw(" Profil"),
    ]));
}

fn profile_lines(data: &Overview, lines: &mut Vec<Line<'static>>) {
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", label), styles::highlight_style()),
            Span::raw(value),
        ])
    };
    lines.push(field("Ad:", data.profile.name.clone()));
    lines.push(field("E-posta:", data.profile.email.clone()));
    lines.push(field(
        "Sınavlar:",
        data.exams_display().unwrap_or_else(|| i18n::NONE.to_string()),
    ));
    lines.push(Line::from(""));

    lines.push(section_title("Anket"));
    match &data.profile.questionnaire {
        Some(q) => lines.extend(questionnaire_lines(q).into_iter().map(|l| Line::from(format!("  {}", l)))),
        None => lines.push(muted_line(i18n::QUESTIONNAIRE_NOT_FOUND)),
    }
    lines.push(Line::from(""));

    progress_lines(data, lines);
    history_lines(data, lines);
}

fn progress_lines(data: &Overview, lines: &mut Vec<Line<'static>>) {
    lines.push(section_title("İlerleme"));
    if data.progress.is_empty() {
        lines.push(muted_line(i18n::NO_PROGRESS));
    } else {
        lines.push(Line::from(Span::styled(
            format!("  {:<28} {:<14} {:>6}", "Konu", "Durum", "Puan"),
            styles::muted_style(),
        )));
        for record in &data.progress {
            lines.push(Line::from(format!(
                "  {:<28} {:<14} {:>6}",
                record.topic,
                record.status,
                record.score_display()
            )));
        }
    }
    lines.push(Line::from(""));
}

fn history_lines(data: &Overview, lines: &mut Vec<Line<'static>>) {
    lines.push(section_title("AI etkileşimleri"));
    if data.history.is_empty() {
        lines.push(muted_line(i18n::NO_AI_HISTORY));
    } else {
        for interaction in &data.history {
            lines.push(Line::from(format!("  {}", interaction_line(interaction))));
        }
    }
    lines.push(Line::from(""));
}
