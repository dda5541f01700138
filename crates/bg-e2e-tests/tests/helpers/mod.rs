//! Shared harness: runs the real router on an ephemeral loopback port.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use bg_app::probe::LivenessProbe;
use bg_app::routes::build_router;
use bg_app::state::AppState;

/// A running server plus a client pointed at it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve with the default process probe.
    pub async fn start() -> Self {
        Self::start_with(AppState::new()).await
    }

    /// Serve with the given state.
    pub async fn start_with(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Probe that always fails with a fixed message.
pub struct BrokenProbe(pub &'static str);

#[async_trait]
impl LivenessProbe for BrokenProbe {
    fn name(&self) -> &str {
        "broken"
    }

    async fn check(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!(self.0))
    }
}

/// State whose health probe always fails.
pub fn broken_state(message: &'static str) -> AppState {
    AppState::with_probe(Arc::new(BrokenProbe(message)))
}
