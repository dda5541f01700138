//! Liveness probe abstraction.
//!
//! `GET /health` runs whatever probe is installed in [`AppState`](crate::state::AppState).
//! The shipped [`ProcessProbe`] cannot fail; downstream-dependency checks
//! implement the same trait and surface failures as a 500 response.

use async_trait::async_trait;

/// A single liveness check.
#[async_trait]
pub trait LivenessProbe: Send + Sync {
    /// Probe name, used in logs.
    fn name(&self) -> &str;

    /// Run the check. Any error marks the instance unhealthy.
    async fn check(&self) -> anyhow::Result<()>;
}

/// Reports healthy whenever the process is able to answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessProbe;

impl ProcessProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LivenessProbe for ProcessProbe {
    fn name(&self) -> &str {
        "process"
    }

    async fn check(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
