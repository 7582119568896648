//! End-to-end smoke test over a real TCP listener.
//!
//! The in-process suite (`tests/api.rs`) cannot observe connect-info,
//! so the peer-address echo is verified here against a real socket.

use std::net::SocketAddr;

use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio::net::TcpListener;

use devops_info_service::api::{create_router, AppState};

async fn spawn_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = create_router(AppState::new());

    let server = tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    (addr, server)
}

#[tokio::test]
async fn served_requests_see_the_real_peer() {
    let (addr, server) = spawn_server().await;

    let client = reqwest::Client::builder()
        .user_agent("info-service-smoke/1.0")
        .build()
        .unwrap();

    let response = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let info: Value = response.json().await.unwrap();
    assert_eq!(info["request"]["client_ip"], "127.0.0.1");
    assert_eq!(info["request"]["user_agent"], "info-service-smoke/1.0");
    assert_eq!(info["request"]["method"], "GET");

    let health: Value = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");

    server.abort();
}
