//! # Application State
//!
//! Session state and screen navigation.
//!
//! - **[`session`]**: the persisted session (token + role) and its store
//! - **[`router`]**: the static route table and the navigation guard

pub mod router;
pub mod session;

pub use router::{NavigationOutcome, RouteDescriptor, Router, Screen};
pub use session::{Session, SessionStore};
