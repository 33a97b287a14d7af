//! # Session State
//!
//! The client-held authentication session: an opaque token plus the role
//! label the server assigned at login.
//!
//! The store is passed explicitly to the router and the API client instead
//! of being read through a global, and both always operate on a fresh
//! [`Session`] snapshot. The on-disk file uses the same entry names the web
//! client keeps in browser storage (`token`, `userRole`), so a session is
//! readable across portal surfaces.

use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::Role;

/// Point-in-time view of the session.
///
/// Cheap to clone; holders never observe later mutations of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// Session carrying a token and role, as written at login.
    pub fn authenticated(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    /// A token is present. Expiry is the server's concern; a stale token
    /// simply fails at the API.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// On-disk shape, entry names matching the web client's storage keys.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(rename = "userRole", skip_serializing_if = "Option::is_none")]
    user_role: Option<Role>,
}

enum Backing {
    File(PathBuf),
    Memory,
}

/// Thread-safe session store with optional file persistence.
///
/// Mutations happen at login and logout only; every navigation and every
/// API call reads a snapshot. Persistence is best-effort: an unwritable
/// session file is logged and the in-memory session stays authoritative.
pub struct SessionStore {
    inner: RwLock<Session>,
    backing: Backing,
}

impl SessionStore {
    /// Store backed by a JSON file. A missing file starts an empty session;
    /// an unreadable or malformed file is discarded with a warning.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<PersistedSession>(&bytes) {
                Ok(persisted) => Session {
                    token: persisted.token,
                    role: persisted.user_role,
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "discarding malformed session file");
                    Session::default()
                }
            },
            Err(_) => Session::default(),
        };

        Self {
            inner: RwLock::new(session),
            backing: Backing::File(path),
        }
    }

    /// Ephemeral store for tests and one-shot runs.
    pub fn in_memory() -> Self {
        Self {
            inner: RwLock::new(Session::default()),
            backing: Backing::Memory,
        }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    /// Write token and role, as the login flow does on success.
    pub fn store(&self, token: String, role: Role) {
        let session = Session::authenticated(token, role);
        *self.inner.write() = session.clone();
        self.persist(&session);
    }

    /// Drop the session, as the logout flow does.
    pub fn clear(&self) {
        *self.inner.write() = Session::default();
        self.persist(&Session::default());
    }

    fn persist(&self, session: &Session) {
        let Backing::File(path) = &self.backing else {
            return;
        };

        let persisted = PersistedSession {
            token: session.token.clone(),
            user_role: session.role,
        };

        let result = serde_json::to_vec_pretty(&persisted)
            .map_err(|e| e.to_string())
            .and_then(|bytes| std::fs::write(path, bytes).map_err(|e| e.to_string()));

        if let Err(e) = result {
            tracing::warn!(path = %path.display(), error = %e, "failed to persist session");
        }
    }
}
