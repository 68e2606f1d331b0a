use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use eduai_core::config::CredentialBackend;
use eduai_core::i18n;
use eduai_core::pages::PageState;
use eduai_core::Route;

use crate::app::{App, AppState};

use super::pages;
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Navigation
            Constraint::Min(10),   // Page content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_nav_bar(frame, app, chunks[1]);
    render_page(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("  EduAI · {}", app.current_route().title());
    let right = format!("{}  [F1] Yardım", app.api.base_url());
    let width = title.chars().count() + right.chars().count() + 4;

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat((area.width as usize).saturating_sub(width))),
        Span::styled(right, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let authenticated = app.is_authenticated();
    let current = app.current_route();

    let mut spans = vec![Span::raw(" ")];
    for (i, route) in Route::nav_items(authenticated).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let label = format!("[{}] {}", i + 1, route.title());
        spans.push(Span::styled(label, styles::nav_item_style(*route == current)));
    }
    if authenticated {
        spans.push(Span::styled(" | ", styles::muted_style()));
        spans.push(Span::styled("[^O] Çıkış", styles::muted_style()));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    match &app.page {
        PageState::Login(page) => pages::auth::render_login(frame, page, area),
        PageState::Register(page) => pages::auth::render_register(frame, page, area),
        PageState::Exams(page) => pages::exams::render(frame, page, area),
        PageState::Questionnaire(page) => pages::questionnaire::render(frame, page, area),
        PageState::Dashboard(page) | PageState::Profile(page) => {
            pages::overview::render(frame, page, area)
        }
        PageState::MiniTest(page) => pages::mini_test::render(frame, page, area),
        PageState::WeeklyPlan(page) => pages::weekly_plan::render(frame, page, area),
        PageState::Chat(page) => pages::chat::render(frame, page, area),
    }
}

/// Key hints for the current page.
fn page_shortcuts(page: &PageState) -> &'static str {
    match page {
        PageState::Login(_) | PageState::Register(_) => "[Tab] alan | [Enter] gönder",
        PageState::Exams(_) => "[↑/↓] gez | [Space] seç | [Enter] devam",
        PageState::Questionnaire(_) => "[Tab] soru | [Space] seçenek | [Enter] gönder",
        PageState::Dashboard(_) => "[e/a/m/w/p] git | [r] yenile | [q] çık",
        PageState::Profile(_) => "[↑/↓] kaydır | [r] yenile | [q] çık",
        PageState::MiniTest(_) => "[↑/↓] soru | [a-h] seçenek | [Enter] gönder",
        PageState::WeeklyPlan(_) => "[n] yeni plan | [d] sil | [r] yenile",
        PageState::Chat(_) => "[Enter] gönder | [Esc] geri",
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (left_text, left_style) = if app.is_busy() {
        (format!(" {} ", i18n::LOADING), styles::highlight_style())
    } else if let Some(ref msg) = app.status_message {
        (format!(" {} ", msg), styles::notice_style())
    } else {
        (String::new(), styles::muted_style())
    };

    let right_text = format!(" {} ", page_shortcuts(&app.page));

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());
    let status_line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), styles::help_key_style()),
        Span::raw(desc),
    ])
}

fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 25, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");
    let store = match app.config.credential_backend {
        CredentialBackend::File => "dosya",
        CredentialBackend::Keyring => "anahtarlık",
    };

    let help_text = vec![
        Line::from(Span::styled("  EduAI", styles::title_style())),
        Line::from(Span::styled(
            format!("  sürüm {}", version),
            styles::muted_style(),
        )),
        Line::from(Span::styled(
            format!("  oturum deposu: {}", store),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Gezinme", styles::highlight_style())),
        help_line("1-7", "Menüdeki sayfaya git"),
        help_line("F2-F8", "Menüdeki sayfaya git (her sayfada)"),
        help_line("Esc", "Geri"),
        help_line("Ctrl+R", "Sayfayı yenile"),
        help_line("Ctrl+O", "Çıkış yap"),
        Line::from(""),
        Line::from(Span::styled(" Formlar", styles::highlight_style())),
        help_line("Tab", "Sonraki alan"),
        help_line("Space", "Seçeneği değiştir"),
        help_line("Enter", "Gönder"),
        Line::from(""),
        Line::from(Span::styled(" Listeler", styles::highlight_style())),
        help_line("↑/↓ j/k", "Gez"),
        help_line("q", "Çık"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       ", styles::muted_style()),
            Span::styled("F1", styles::help_key_style()),
            Span::styled(" veya ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" ile kapat", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(40, 7, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Çıkmak istediğinize emin misiniz?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   ", styles::muted_style()),
            Span::styled("[E]", styles::help_key_style()),
            Span::styled(" evet, ", styles::muted_style()),
            Span::styled("[H]", styles::help_key_style()),
            Span::styled(" hayır", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}
