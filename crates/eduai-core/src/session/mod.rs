//! Session management for the single bearer credential.
//!
//! This module provides:
//! - `Session`: the shared handle every component reads the credential from
//! - `CredentialStorage`: persistence backends (file, OS keychain, memory)
//!
//! The credential is opaque. Nothing is parsed out of it and no expiry is
//! tracked; the backend decides whether it is still valid.

pub mod storage;

use std::sync::Arc;

use tracing::{info, warn};

pub use storage::{CredentialStorage, FileStorage, KeyringStorage, MemoryStorage};

/// Handle to the persisted credential.
///
/// Clone is cheap; all clones share the same storage backend, so a token set
/// through one handle is immediately visible to the API client and the
/// route guard holding another.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn CredentialStorage>,
}

impl Session {
    pub fn new(storage: impl CredentialStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// A session that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    /// Store the credential, replacing any previous one.
    pub fn set_credential(&self, token: &str) {
        if let Err(e) = self.storage.store(token) {
            warn!(error = %e, "Failed to persist credential");
        } else {
            info!("Credential stored");
        }
    }

    /// The stored credential, if any.
    pub fn get_credential(&self) -> Option<String> {
        match self.storage.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read credential, treating as absent");
                None
            }
        }
    }

    pub fn clear_credential(&self) {
        if let Err(e) = self.storage.delete() {
            warn!(error = %e, "Failed to remove credential");
        } else {
            info!("Credential cleared");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_credential().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
