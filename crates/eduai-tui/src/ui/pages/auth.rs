use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use eduai_core::pages::{LoginField, LoginPage, RegisterField, RegisterPage};

use super::{input_line, muted_line, page_block, status_lines};
use crate::ui::render::centered_rect_fixed;

pub fn render_login(frame: &mut Frame, page: &LoginPage, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        input_line("E-posta:", &page.form.email, page.focus == LoginField::Email, false),
        input_line(
            "Şifre:",
            &page.form.password,
            page.focus == LoginField::Password,
            true,
        ),
        Line::from(""),
        muted_line("Hesabınız yok mu? [2] Kayıt"),
        Line::from(""),
    ];
    lines.extend(status_lines(page.loading, page.error.as_deref()));

    render_form(frame, "Giriş", lines, area);
}

pub fn render_register(frame: &mut Frame, page: &RegisterPage, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        input_line("Ad Soyad:", &page.form.name, page.focus == RegisterField::Name, false),
        input_line("E-posta:", &page.form.email, page.focus == RegisterField::Email, false),
        input_line(
            "Şifre:",
            &page.form.password,
            page.focus == RegisterField::Password,
            true,
        ),
        Line::from(""),
        muted_line("Zaten hesabınız var mı? [1] Giriş"),
        Line::from(""),
    ];
    lines.extend(status_lines(page.loading, page.error.as_deref()));

    render_form(frame, "Kayıt", lines, area);
}

fn render_form(frame: &mut Frame, title: &str, lines: Vec<Line<'static>>, area: Rect) {
    let height = lines.len() as u16 + 2;
    let form_area = centered_rect_fixed(60, height, area);
    frame.render_widget(Clear, form_area);

    let paragraph = Paragraph::new(lines)
        .block(page_block(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, form_area);
}
