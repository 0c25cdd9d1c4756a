use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde_json::json;
use tempfile::TempDir;

use quotidian::api;
use quotidian::config::Settings;
use quotidian::llm::LlamaCppClient;

/// How the stub llama.cpp backend should behave for a test.
pub enum StubBackend {
    /// Respond 200 with the given `content` field
    Content(&'static str),
    /// Respond with the given error status
    Error(u16),
    /// Point the service at a port nothing listens on
    Down,
}

/// A quotidian server running in-process on an ephemeral port, wired to a
/// stub completion backend and a throwaway database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub settings: Settings,
    _data_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("request to test server failed")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("request to test server failed")
    }
}

pub async fn spawn_app(stub: StubBackend) -> TestApp {
    let backend_url = match stub {
        StubBackend::Content(text) => spawn_stub_backend(StatusCode::OK, json!({ "content": text })).await,
        StubBackend::Error(status) => {
            let status = StatusCode::from_u16(status).expect("valid status code");
            spawn_stub_backend(status, json!({ "error": "model exploded" })).await
        }
        StubBackend::Down => {
            // Bind and immediately drop a listener to find a port with
            // nothing behind it.
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
            let port = listener.local_addr().expect("probe addr").port();
            drop(listener);
            format!("http://127.0.0.1:{port}")
        }
    };

    let data_dir = tempfile::tempdir().expect("create temporary data dir");

    let index_page = data_dir.path().join("index.html");
    std::fs::write(&index_page, "<html><body>quotidian test page</body></html>")
        .expect("write test landing page");

    let mut settings = Settings::default();
    settings.general.data_dir = data_dir.path().to_path_buf();
    settings.server.index_page = index_page;
    settings.llm.base_url = backend_url;

    let backend = LlamaCppClient::from_settings(&settings).expect("build completion client");
    let router = api::create_router(Arc::new(settings.clone()), Arc::new(backend));

    let addr = serve_on_ephemeral_port(router).await;

    TestApp {
        addr,
        client: reqwest::Client::new(),
        settings,
        _data_dir: data_dir,
    }
}

/// Start a one-route llama.cpp stand-in that answers `POST /completion`
/// with a fixed response, returning its base URL.
async fn spawn_stub_backend(status: StatusCode, body: serde_json::Value) -> String {
    let router = Router::new().route(
        "/completion",
        post(move || async move { (status, Json(body)) }),
    );

    let addr = serve_on_ephemeral_port(router).await;
    format!("http://{addr}")
}

async fn serve_on_ephemeral_port(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });

    addr
}
