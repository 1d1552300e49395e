//! In-process proxy bound to an ephemeral port.

use promptology::app::proxy;
use promptology::domain::ProxyConfig;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use url::Url;

pub(crate) struct ProxyUnderTest {
    base: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl ProxyUnderTest {
    /// Start a proxy forwarding to `backend_url`.
    pub(crate) async fn start(backend_url: &str) -> Self {
        let config = ProxyConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            backend_url: Url::parse(backend_url).expect("valid backend url"),
            cors: false,
        };
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            proxy::serve_with_shutdown(listener, &config, async move {
                let _ = rx.await;
            })
            .await
            .expect("proxy should serve");
        });

        Self { base, shutdown: Some(tx), handle }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub(crate) async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}
