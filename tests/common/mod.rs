use catalog_api::transport;
use catalog_api::MemoryStore;

/// An API server bound to an ephemeral port, backed by the in-memory store.
pub struct TestServer {
    pub base_url: String,
    pub store: MemoryStore,
    pub client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> TestServer {
        let store = MemoryStore::new();
        let router = transport::http::create_router(transport::http::AppState::in_memory(store.clone()));

        // Bind to an ephemeral port so tests can run in parallel.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestServer {
            base_url: format!("http://127.0.0.1:{}", port),
            store,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
