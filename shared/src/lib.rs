//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between the portal client and the
//! volunteer activity API server.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and account DTOs
//!   - **[`dto::user`]**: User administration DTOs
//!   - **[`dto::activity`]**: Activity and registration DTOs
//!   - **[`dto::volunteer`]**: Volunteer profile DTOs
//! - **[`utils`]**: Shared utility functions
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Enums serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
