//! # Core Abstractions
//!
//! Error types and service traits shared by the rest of the crate.
//!
//! - **[`error`]**: Application error types (`AppError`, `ApiError`, `Result<T>`)
//! - **[`service`]**: The `ApiService` trait for dependency injection

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, Result};
pub use service::ApiService;
