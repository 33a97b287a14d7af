//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the volunteer activity API over JSON.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, password change and session roles
//! - [`user`] - User accounts as seen by administrators
//! - [`activity`] - Activities and activity registrations
//! - [`volunteer`] - Volunteer profiles
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "username": "alice",
//!   "password": "MyPassword123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "id": 1,
//!     "username": "alice",
//!     "created_at": "2024-01-01T00:00:00Z"
//!   },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "role": "volunteer",
//!   "message": "Login successful"
//! }
//! ```

pub mod activity;
pub mod auth;
pub mod user;
pub mod volunteer;

pub use activity::*;
pub use auth::*;
pub use user::*;
pub use volunteer::*;
