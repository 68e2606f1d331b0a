//! EduAI core library.
//!
//! Everything the terminal client needs that is independent of rendering:
//!
//! - `session`: the single persisted bearer credential
//! - `api`: the HTTP client wrapper and its typed call sites
//! - `routes`: the route table, route guard and navigation history
//! - `models`: request/response payloads for the backend
//! - `pages`: per-page view state and actions
//! - `tasks`: cancellable page-scoped loads
//! - `config`: application configuration

pub mod api;
pub mod config;
pub mod i18n;
pub mod models;
pub mod pages;
pub mod routes;
pub mod session;
pub mod tasks;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use routes::{Navigator, Route, RouteGuard};
pub use session::Session;
