//! Register and login forms.

use tracing::info;

use super::{push_char, Command, MAX_INPUT_LENGTH};
use crate::api::ApiError;
use crate::i18n;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse};
use crate::routes::Route;
use crate::session::Session;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegisterField {
    #[default]
    Name,
    Email,
    Password,
}

impl RegisterField {
    pub fn next(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

#[derive(Debug, Default)]
pub struct RegisterPage {
    pub form: RegisterRequest,
    pub focus: RegisterField,
    pub loading: bool,
    pub error: Option<String>,
}

impl RegisterPage {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            RegisterField::Name => &mut self.form.name,
            RegisterField::Email => &mut self.form.email,
            RegisterField::Password => &mut self.form.password,
        }
    }

    pub fn type_char(&mut self, c: char) {
        push_char(self.focused_mut(), MAX_INPUT_LENGTH, c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn submit(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        let form = &self.form;
        if form.name.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty() {
            self.error = Some(i18n::REQUIRED_FIELDS.to_string());
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(Command::Register(self.form.clone()))
    }

    pub fn apply(&mut self, result: Result<TokenResponse, ApiError>, session: &Session) -> Option<Route> {
        self.loading = false;
        match result {
            Ok(token) => {
                session.set_credential(&token.access_token);
                info!("Registered new account");
                Some(Route::Exams)
            }
            Err(e) => {
                self.error = Some(e.user_message(i18n::REGISTER_FAILED));
                None
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginPage {
    pub form: LoginRequest,
    pub focus: LoginField,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginPage {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.form.email,
            LoginField::Password => &mut self.form.password,
        }
    }

    pub fn type_char(&mut self, c: char) {
        push_char(self.focused_mut(), MAX_INPUT_LENGTH, c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn submit(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        if self.form.email.trim().is_empty() || self.form.password.is_empty() {
            self.error = Some(i18n::REQUIRED_FIELDS.to_string());
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(Command::Login(self.form.clone()))
    }

    pub fn apply(&mut self, result: Result<TokenResponse, ApiError>, session: &Session) -> Option<Route> {
        self.loading = false;
        match result {
            Ok(token) => {
                session.set_credential(&token.access_token);
                info!("Logged in");
                Some(Route::Dashboard)
            }
            Err(e) => {
                self.error = Some(e.user_message(i18n::LOGIN_FAILED));
                None
            }
        }
    }
}
