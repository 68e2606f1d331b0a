use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use eduai_core::i18n;
use eduai_core::models::WeeklyPlan;
use eduai_core::pages::WeeklyPlanPage;
use eduai_core::utils::format_hours;

use super::{muted_line, page_block, section_title, status_lines};
use crate::ui::styles;

pub fn render(frame: &mut Frame, page: &WeeklyPlanPage, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_plan_list(frame, page, chunks[0]);
    render_plan_detail(frame, page, chunks[1]);
}

fn render_plan_list(frame: &mut Frame, page: &WeeklyPlanPage, area: Rect) {
    let items: Vec<ListItem> = if page.plans.is_empty() {
        vec![ListItem::new(muted_line(i18n::NO_PLANS))]
    } else {
        page.plans
            .iter()
            .enumerate()
            .map(|(i, plan)| {
                let style = styles::field_style(i == page.cursor);
                let id = plan.id.map(|id| format!("#{}", id)).unwrap_or_default();
                ListItem::new(Line::from(format!(" {} {}", plan.week_start, id))).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(page_block(&format!("Planlar ({})", page.plans.len())));

    let mut state = ListState::default();
    if !page.plans.is_empty() {
        state.select(Some(page.cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_plan_detail(frame: &mut Frame, page: &WeeklyPlanPage, area: Rect) {
    let mut lines = status_lines(page.loading, page.error.as_deref());

    if let Some(plan) = &page.current {
        lines.push(section_title("Yeni oluşturulan plan"));
        plan_lines(plan, &mut lines);
        lines.push(Line::from(""));
    }
    match page.selected() {
        Some(plan) => {
            lines.push(section_title("Seçili plan"));
            plan_lines(plan, &mut lines);
        }
        None if page.current.is_none() => {
            lines.push(muted_line("[n] ile yeni bir haftalık plan oluşturun"));
        }
        None => {}
    }

    let paragraph = Paragraph::new(lines)
        .block(page_block("Haftalık Plan"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn plan_lines(plan: &WeeklyPlan, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::styled("  Hafta: ", styles::muted_style()),
        Span::raw(plan.week_start.clone()),
    ]));
    for subject in &plan.subjects {
        lines.push(Line::from(format!(
            "  {:<12} {:<24} {} saat",
            subject.day,
            subject.topic,
            format_hours(subject.duration)
        )));
    }
    if !plan.tests().is_empty() {
        lines.push(Line::from(Span::styled("  Testler", styles::highlight_style())));
        for test in plan.tests() {
            lines.push(Line::from(format!(
                "  {:<12} {:<24} {} soru",
                test.day, test.subject, test.num_questions
            )));
        }
    }
}
