//! # Services Module
//!
//! External service integrations. The only collaborator of this client is
//! the remote volunteer activity REST API.
//!
//! ```text
//! services/
//! └── api/    - Backend HTTP API client
//!              (auth, users, activities, registrations, volunteers)
//! ```

pub mod api;
