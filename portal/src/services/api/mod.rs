//! # Backend API Client Module
//!
//! HTTP client for the remote volunteer activity REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports
//! ├── client.rs        - ApiClient struct and uniform response handling
//! ├── auth.rs          - Authentication endpoints (login, register, password)
//! ├── users.rs         - User administration endpoints
//! ├── activities.rs    - Activity CRUD and registration listing
//! ├── registrations.rs - Registration approval workflow
//! └── volunteers.rs    - Volunteer profiles and roster
//! ```
//!
//! Every operation is a pure request-shape definition: fixed method and
//! path, optional JSON body, bearer header attached iff the session holds a
//! token. All decisions (permissions, validation) belong to the server.

pub mod activities;
pub mod auth;
pub mod client;
pub mod registrations;
pub mod users;
pub mod volunteers;

pub use client::ApiClient;
