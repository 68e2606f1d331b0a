//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes. Pages with text fields receive printable
//! keys directly; the other pages also accept single-key shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use eduai_core::pages::PageState;
use eduai_core::Route;

use crate::app::{App, AppState};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1)) {
            app.state = AppState::Normal;
        }
        return false;
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('e') | KeyCode::Char('E')
            | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('h') | KeyCode::Char('H')
            | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return false;
    }

    if handle_global_keys(app, key) {
        return false;
    }

    if !takes_text(&app.page) && handle_shortcut_keys(app, key) {
        return false;
    }

    handle_page_input(app, key);
    false
}

/// Pages where printable keys are typed into a field.
fn takes_text(page: &PageState) -> bool {
    matches!(
        page,
        PageState::Login(_) | PageState::Register(_) | PageState::Questionnaire(_) | PageState::Chat(_)
    )
}

/// Keys that work on every page. Returns true if the key was consumed.
fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::F(1) => app.state = AppState::ShowingHelp,
        KeyCode::F(n) if n >= 2 => {
            let items = Route::nav_items(app.is_authenticated());
            match items.get(usize::from(n - 2)) {
                Some(route) => app.navigate(*route),
                None => return false,
            }
        }
        KeyCode::Char('o') if ctrl => {
            if app.is_authenticated() {
                app.logout();
            }
        }
        KeyCode::Char('r') if ctrl => app.reload(),
        KeyCode::Esc => app.back(),
        _ => return false,
    }
    true
}

/// Single-letter shortcuts for pages without text fields.
fn handle_shortcut_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,
        KeyCode::Char('l') => app.logout(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            let items = Route::nav_items(app.is_authenticated());
            match items.get(index) {
                Some(route) => app.navigate(*route),
                None => return false,
            }
        }
        _ => return false,
    }
    true
}

/// Dashboard links to the pages it summarizes.
fn quick_link(code: KeyCode) -> Option<Route> {
    match code {
        KeyCode::Char('e') => Some(Route::Exams),
        KeyCode::Char('a') => Some(Route::Questionnaire),
        KeyCode::Char('m') => Some(Route::MiniTest),
        KeyCode::Char('w') => Some(Route::WeeklyPlan),
        KeyCode::Char('p') => Some(Route::Profile),
        _ => None,
    }
}

fn handle_page_input(app: &mut App, key: KeyEvent) {
    if matches!(app.page, PageState::Dashboard(_)) {
        if let Some(route) = quick_link(key.code) {
            app.navigate(route);
            return;
        }
    }

    let command = match &mut app.page {
        PageState::Login(page) => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                page.next_field();
                None
            }
            KeyCode::Backspace => {
                page.backspace();
                None
            }
            KeyCode::Enter => page.submit(),
            KeyCode::Char(c) => {
                page.type_char(c);
                None
            }
            _ => None,
        },
        PageState::Register(page) => match key.code {
            KeyCode::Tab | KeyCode::Down => {
                page.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                page.next_field();
                page.next_field();
                None
            }
            KeyCode::Backspace => {
                page.backspace();
                None
            }
            KeyCode::Enter => page.submit(),
            KeyCode::Char(c) => {
                page.type_char(c);
                None
            }
            _ => None,
        },
        PageState::Exams(page) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                page.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                page.move_down();
                None
            }
            KeyCode::Char(' ') => {
                page.select_current();
                None
            }
            KeyCode::Enter => page.submit(),
            _ => None,
        },
        PageState::Questionnaire(page) => match key.code {
            KeyCode::Tab | KeyCode::Down => {
                page.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                page.prev_field();
                None
            }
            KeyCode::Backspace => {
                page.backspace();
                None
            }
            KeyCode::Enter => page.submit(),
            KeyCode::Char(c) => {
                page.type_char(c);
                None
            }
            _ => None,
        },
        PageState::Dashboard(page) | PageState::Profile(page) => {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => page.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => page.scroll_down(),
                _ => {}
            }
            None
        }
        PageState::MiniTest(page) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                page.prev_question();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                page.next_question();
                None
            }
            KeyCode::Char(' ') | KeyCode::Right | KeyCode::Left => {
                page.cycle_choice();
                None
            }
            KeyCode::Char(c @ 'a'..='h') => {
                page.choose(c as usize - 'a' as usize);
                None
            }
            KeyCode::Enter => page.submit(),
            _ => None,
        },
        PageState::WeeklyPlan(page) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                page.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                page.move_down();
                None
            }
            KeyCode::Char('n') => page.create(),
            KeyCode::Char('d') | KeyCode::Delete => page.delete_selected(),
            _ => None,
        },
        PageState::Chat(page) => match key.code {
            KeyCode::Backspace => {
                page.backspace();
                None
            }
            KeyCode::Enter => page.send(),
            KeyCode::Char(c) => {
                page.type_char(c);
                None
            }
            _ => None,
        },
    };

    if let Some(command) = command {
        app.dispatch(command);
    }
}
