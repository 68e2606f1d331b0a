use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use eduai_core::models::{LearningStyle, QuestionKind};
use eduai_core::pages::{QuestionnaireForm, QuestionnairePage, StaticField, StaticForm};

use super::{input_line, muted_line, page_block, section_title, status_lines};
use crate::ui::styles;

pub fn render(frame: &mut Frame, page: &QuestionnairePage, area: Rect) {
    let mut lines = match &page.form {
        Some(QuestionnaireForm::Dynamic {
            questions,
            answers,
            cursor,
        }) => {
            let mut lines = vec![section_title("Size özel sorular"), Line::from("")];
            for (i, (question, answer)) in questions.iter().zip(answers).enumerate() {
                let focused = i == *cursor;
                lines.push(Line::from(Span::styled(
                    format!("{}. {}", i + 1, question.question),
                    styles::field_style(focused),
                )));
                match &question.kind {
                    QuestionKind::Choice { options } => {
                        lines.push(choice_line(options, answer));
                    }
                    QuestionKind::Number | QuestionKind::Text => {
                        lines.push(input_line("Cevap:", answer, focused, false));
                    }
                }
                lines.push(Line::from(""));
            }
            lines
        }
        Some(QuestionnaireForm::Static(form)) => static_lines(form),
        None => Vec::new(),
    };
    lines.extend(status_lines(page.loading, page.error.as_deref()));

    let paragraph = Paragraph::new(lines)
        .block(page_block("Öğrenme Anketi"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn choice_line(options: &[String], answer: &str) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];
    for option in options {
        let (marker, style) = if option == answer {
            ("(•) ", styles::highlight_style())
        } else {
            ("( ) ", styles::muted_style())
        };
        spans.push(Span::styled(format!("{}{}  ", marker, option), style));
    }
    Line::from(spans)
}

fn static_lines(form: &StaticForm) -> Vec<Line<'static>> {
    let style_focused = form.focus == StaticField::LearningStyle;
    let mut style_spans = vec![Span::styled(
        format!("  {:<14}", "Öğrenme stili:"),
        styles::field_style(style_focused),
    )];
    for style in LearningStyle::ALL {
        let (marker, span_style) = if form.learning_style == Some(style) {
            ("(•) ", styles::highlight_style())
        } else {
            ("( ) ", styles::muted_style())
        };
        style_spans.push(Span::styled(format!("{}{}  ", marker, style.label()), span_style));
    }

    vec![
        Line::from(""),
        Line::from(style_spans),
        input_line(
            "Günlük saat:",
            &form.daily_hours,
            form.focus == StaticField::DailyHours,
            false,
        ),
        input_line(
            "Zor konular:",
            &form.difficult_topics,
            form.focus == StaticField::DifficultTopics,
            false,
        ),
        muted_line("Konuları virgülle ayırın"),
        Line::from(""),
    ]
}
