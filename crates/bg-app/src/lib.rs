//! Blue-green sample app: library crate.
//!
//! Re-exports all modules so the binary (`main.rs`) and the end-to-end
//! test crate share the same router, config and probe types.

pub mod config;
pub mod error;
pub mod probe;
pub mod routes;
pub mod state;

/// Banner served on `GET /`. Edit this to mark a new release.
pub const BANNER: &str = "Hello, Blue-Green Deployment on Amazon Linux 2! New Version! V15";

/// Version tag reported by `GET /health`.
pub const VERSION_TAG: &str = "V10";

/// Service name reported by `GET /health`.
pub const SERVICE_NAME: &str = "blue-green-app";
