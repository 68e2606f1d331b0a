//! Application state management for the EduAI terminal client.
//!
//! This module contains the `App` struct that owns the session, the API
//! client, the navigator and the page on screen, and coordinates the
//! page-scoped background loads.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use eduai_core::pages::{Command, LoginPage, Outcome, PageState};
use eduai_core::tasks::ScopedTask;
use eduai_core::{ApiClient, Config, Navigator, Route, Session};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the page result channel.
/// A page has at most a couple of requests in flight at once.
const CHANNEL_BUFFER_SIZE: usize = 16;

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// An outcome tagged with the navigation generation that started it.
#[derive(Debug)]
struct PageResult {
    generation: u64,
    outcome: Outcome,
}

pub struct App {
    pub config: Config,
    pub session: Session,
    pub api: ApiClient,
    pub navigator: Navigator,
    pub page: PageState,
    pub state: AppState,

    // Status message
    pub status_message: Option<String>,

    // Bumped on every page change; results from older pages are dropped
    generation: u64,
    tasks: Vec<ScopedTask<()>>,
    result_rx: mpsc::Receiver<PageResult>,
    result_tx: mpsc::Sender<PageResult>,
}

impl App {
    /// Create the application and enter `initial`, subject to the guard.
    pub fn new(config: Config, session: Session, base_url: &str, initial: Route) -> Result<Self> {
        debug!(base_url, "Creating API client");
        let api = ApiClient::new(base_url, session.clone())?;
        let navigator = Navigator::new(session.clone(), initial);
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let mut app = Self {
            config,
            session,
            api,
            page: page_for(navigator.current()),
            navigator,
            state: AppState::Normal,
            status_message: None,
            generation: 0,
            tasks: Vec::new(),
            result_rx: rx,
            result_tx: tx,
        };
        app.enter_current();
        Ok(app)
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Whether any request of the current page is still running.
    pub fn is_busy(&self) -> bool {
        self.tasks.iter().any(|t| !t.is_finished())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn navigate(&mut self, route: Route) {
        self.navigator.navigate(route);
        self.enter_current();
    }

    pub fn back(&mut self) {
        self.navigator.back();
        self.enter_current();
    }

    /// Clear the credential and show the login page.
    pub fn logout(&mut self) {
        self.navigator.logout();
        self.status_message = Some("Çıkış yapıldı".to_string());
        self.enter_current();
    }

    /// Reload the current page from scratch.
    pub fn reload(&mut self) {
        self.enter_current();
    }

    /// Replace the page with a fresh one for the navigator's current route.
    ///
    /// Dropping the previous page's tasks cancels them.
    fn enter_current(&mut self) {
        self.generation += 1;
        if !self.tasks.is_empty() {
            debug!(count = self.tasks.len(), "Cancelling loads of previous page");
            self.tasks.clear();
        }

        let route = self.navigator.current();
        info!(path = route.path(), "Entering page");
        self.page = page_for(route);
        if let Some(command) = self.page.on_enter() {
            self.dispatch(command);
        }
    }

    // ========================================================================
    // Background tasks
    // ========================================================================

    /// Run `command` in the background for the current page.
    pub fn dispatch(&mut self, command: Command) {
        self.tasks.retain(|t| !t.is_finished());

        let api = self.api.clone();
        let tx = self.result_tx.clone();
        let generation = self.generation;

        self.tasks.push(ScopedTask::spawn(async move {
            let outcome = command.run(&api).await;
            if let Err(e) = tx.send(PageResult { generation, outcome }).await {
                error!(error = %e, "Failed to send page result - channel closed");
            }
        }));
    }

    /// Apply every finished outcome to the current page.
    pub fn check_background_tasks(&mut self) {
        // Collect all pending results first to avoid borrow conflicts
        let mut results = Vec::new();
        while let Ok(result) = self.result_rx.try_recv() {
            results.push(result);
        }

        for result in results {
            self.process_page_result(result);
        }
    }

    fn process_page_result(&mut self, result: PageResult) {
        if result.generation != self.generation {
            debug!(
                stale = result.generation,
                current = self.generation,
                "Dropping result for a page no longer shown"
            );
            return;
        }
        if let Some(route) = self.page.apply(result.outcome, &self.session) {
            // A finished login or registration form is not kept in history
            if matches!(self.current_route(), Route::Login | Route::Register) {
                self.navigator.replace(route);
                self.enter_current();
            } else {
                self.navigate(route);
            }
        }
    }
}

/// Fresh page state for `route`.
fn page_for(route: Route) -> PageState {
    // The navigator never rests on the root route
    PageState::for_route(route).unwrap_or_else(|| PageState::Login(LoginPage::default()))
}
