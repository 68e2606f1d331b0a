//! Route table, route guard and navigation history.
//!
//! Navigation to a protected route is checked against the session before
//! the page is entered. Without a credential the login route takes the place
//! of the requested entry in the history, so the requested page never loads.

use tracing::{debug, info};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Register,
    Login,
    Exams,
    Questionnaire,
    Dashboard,
    MiniTest,
    WeeklyPlan,
    Profile,
    Chat,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Root,
        Route::Register,
        Route::Login,
        Route::Exams,
        Route::Questionnaire,
        Route::Dashboard,
        Route::MiniTest,
        Route::WeeklyPlan,
        Route::Profile,
        Route::Chat,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::Exams => "/exams",
            Route::Questionnaire => "/questionnaire",
            Route::Dashboard => "/dashboard",
            Route::MiniTest => "/mini-test",
            Route::WeeklyPlan => "/weekly-plan",
            Route::Profile => "/profile",
            Route::Chat => "/chat",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL.iter().copied().find(|r| r.path() == normalized)
    }

    /// Routes that require a credential.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Root | Route::Register | Route::Login)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Root => "EduAI",
            Route::Register => "Kayıt",
            Route::Login => "Giriş",
            Route::Exams => "Sınav Seçimi",
            Route::Questionnaire => "Anket",
            Route::Dashboard => "Panel",
            Route::MiniTest => "Mini Test",
            Route::WeeklyPlan => "Haftalık Plan",
            Route::Profile => "Profil",
            Route::Chat => "Sohbet",
        }
    }

    /// Navigation bar entries for the current authentication state.
    pub fn nav_items(authenticated: bool) -> &'static [Route] {
        if authenticated {
            &[
                Route::Dashboard,
                Route::Exams,
                Route::Questionnaire,
                Route::MiniTest,
                Route::WeeklyPlan,
                Route::Profile,
                Route::Chat,
            ]
        } else {
            &[Route::Login, Route::Register]
        }
    }
}

/// Outcome of a guarded navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    Redirect(Route),
}

/// Gate for protected routes.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn check(&self, route: Route) -> GuardDecision {
        if route == Route::Root {
            return GuardDecision::Redirect(Route::Dashboard);
        }
        if route.is_protected() && !self.session.is_authenticated() {
            return GuardDecision::Redirect(Route::Login);
        }
        GuardDecision::Render(route)
    }
}

/// History stack of visited routes.
#[derive(Debug, Clone)]
pub struct Navigator {
    guard: RouteGuard,
    history: Vec<Route>,
}

impl Navigator {
    /// Start at `initial`, already passed through the guard.
    pub fn new(session: Session, initial: Route) -> Self {
        let mut nav = Self {
            guard: RouteGuard::new(session),
            history: Vec::new(),
        };
        nav.navigate(initial);
        nav
    }

    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Login)
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Push `route`, or the route the guard redirects it to.
    /// Returns the route that ends up rendered.
    pub fn navigate(&mut self, route: Route) -> Route {
        self.resolve(route, false)
    }

    /// Like `navigate`, but always replaces the current entry.
    pub fn replace(&mut self, route: Route) -> Route {
        self.resolve(route, true)
    }

    /// Pop back to the previous entry, re-checking it against the guard.
    pub fn back(&mut self) -> Route {
        if self.history.len() > 1 {
            self.history.pop();
        }
        let current = self.current();
        self.resolve(current, true)
    }

    /// Clear the credential and go to the login page.
    pub fn logout(&mut self) -> Route {
        self.guard.session.clear_credential();
        info!("Logged out");
        self.navigate(Route::Login)
    }

    // A redirect takes the place of the requested entry, so the protected
    // route never appears in history.
    fn resolve(&mut self, requested: Route, replace: bool) -> Route {
        let mut route = requested;
        // Root redirects to the dashboard, which may redirect again to login
        loop {
            match self.guard.check(route) {
                GuardDecision::Render(target) => {
                    if replace {
                        self.history.pop();
                    }
                    if self.history.last() != Some(&target) {
                        self.history.push(target);
                    }
                    debug!(path = target.path(), "Navigated");
                    return target;
                }
                GuardDecision::Redirect(target) => {
                    info!(from = route.path(), to = target.path(), "Navigation redirected");
                    route = target;
                }
            }
        }
    }
}
