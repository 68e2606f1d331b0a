//! HTTP client wrapper for the EduAI backend.
//!
//! All backend traffic goes through `ApiClient`. It reads the credential
//! from the `Session` it was built with and attaches it as a bearer token
//! to every request; without a credential the header is left out and the
//! server decides.
//!
//! - `descriptor`: method/path/query/body of a single call
//! - `endpoints`: one `Endpoint` per backend operation
//! - `client`: dispatch and the typed call sites
//! - `error`: `ApiError`

pub mod client;
pub mod descriptor;
pub mod endpoints;
pub mod error;

pub use client::{ApiClient, ApiResponse};
pub use descriptor::RequestDescriptor;
pub use endpoints::Endpoint;
pub use error::ApiError;
