//! Shared application state for the Axum server.
//!
//! Nothing in here is mutable; cloning hands each request task another
//! reference to the same probe.

use std::sync::Arc;

use crate::probe::{LivenessProbe, ProcessProbe};

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    /// Probe run by `GET /health`.
    pub probe: Arc<dyn LivenessProbe>,
}

impl AppState {
    /// State with the default [`ProcessProbe`].
    pub fn new() -> Self {
        Self::with_probe(Arc::new(ProcessProbe::new()))
    }

    /// State with a caller-supplied probe (tests, dependency checks).
    pub fn with_probe(probe: Arc<dyn LivenessProbe>) -> Self {
        Self { probe }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
