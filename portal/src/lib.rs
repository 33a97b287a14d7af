//! # Volunteer Portal Client - Library Root
//!
//! Client library for the volunteer activity management service. The remote
//! REST API owns all business logic; this crate owns the session, the
//! navigation guard and the typed request catalog.
//!
//! ## Module Structure
//!
//! ```text
//! portal
//! ├── app        - Session store, route table and navigation guard
//! ├── core       - Error types and the ApiService trait
//! ├── services   - Backend HTTP API client (one module per resource)
//! ├── config     - Environment-driven configuration
//! └── utils      - Input validation helpers
//! ```
//!
//! ## Control Flow
//!
//! A navigation attempt runs the guard against a session snapshot and either
//! mounts the target screen or redirects; mounted screens call the API
//! client, each call independently resolving to a payload or an [`ApiError`]
//! for the UI layer to display. The guard itself is synchronous and
//! infallible.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use portal::{ApiClient, Config, Router, SessionStore};
//!
//! # async fn run() -> portal::Result<()> {
//! let config = Config::from_env().map_err(portal::AppError::Config)?;
//! let session = Arc::new(SessionStore::load(&config.session_file));
//!
//! let router = Router::new(session.clone());
//! let client = ApiClient::new(&config, session);
//!
//! client.session_store(); // same store the router consults
//! router.navigate("/admin");
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{NavigationOutcome, RouteDescriptor, Router, Screen, Session, SessionStore};
pub use config::Config;
pub use crate::core::{ApiError, ApiService, AppError, Result};
pub use services::api::ApiClient;
