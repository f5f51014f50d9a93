//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses
//! - **[`extractors`]**: Custom extractors (validated form bodies)
//! - **[`http`]**: HTTP middleware (CORS)
//! - **[`server`]**: Server setup, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedForm;

// Re-export HTTP middleware
pub use http::create_cors_layer;

// Re-export server helpers
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
