//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;

use echo_server::{EchoConfig, EchoServer, SequenceCursor, Shutdown};
use tokio::net::TcpListener;

/// A running server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub cursor: Arc<SequenceCursor>,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with the given config on 127.0.0.1:0.
pub async fn start_server(mut config: EchoConfig) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let cursor = Arc::new(SequenceCursor::new());
    let shutdown = Shutdown::new();
    let server = EchoServer::with_cursor(config, cursor.clone());
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        cursor,
        shutdown,
    }
}

#[allow(dead_code)]
pub async fn start_default_server() -> TestServer {
    start_server(EchoConfig::default()).await
}

/// Client that never reuses pooled connections between requests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
