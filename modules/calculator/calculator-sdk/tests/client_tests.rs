#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Client behavior against endpoints that never answer properly.

use std::time::{Duration, Instant};

use calculator_sdk::{CalculatorClientV1, CalculatorError, CalculatorGrpcClient, GrpcClientConfig};
use tokio::net::TcpListener;

fn config(deadline: Duration) -> GrpcClientConfig {
    GrpcClientConfig::new("calculator")
        .with_connect_timeout(Duration::from_secs(1))
        .with_rpc_timeout(deadline)
}

/// An address on which nothing listens.
async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    let target = closed_port().await;
    let client = CalculatorGrpcClient::connect_lazy(&target, &config(Duration::from_secs(5)))
        .expect("lazy connect should not fail");

    let err = client.add(3.5, 2.5).await.expect_err("no server is listening");
    assert!(
        matches!(err, CalculatorError::Unavailable(_)),
        "expected Unavailable, got {err:?}"
    );
}

#[tokio::test]
async fn silent_server_hits_deadline() {
    // Accepts TCP connections but never speaks HTTP/2.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let target = listener.local_addr().unwrap().to_string();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = CalculatorGrpcClient::connect_lazy(&target, &config(Duration::from_millis(200)))
        .expect("lazy connect");

    let started = Instant::now();
    let err = client.add(1.0, 2.0).await.expect_err("server never responds");
    assert!(
        matches!(err, CalculatorError::DeadlineExceeded(_)),
        "expected DeadlineExceeded, got {err:?}"
    );
    assert!(started.elapsed() < Duration::from_secs(3), "must not hang");
}

#[tokio::test]
async fn invalid_target_is_rejected_up_front() {
    let result = CalculatorGrpcClient::connect_lazy("bad target", &config(Duration::from_secs(1)));
    assert!(matches!(
        result,
        Err(CalculatorError::InvalidTarget { .. })
    ));
}

#[tokio::test]
async fn deadline_comes_from_config() {
    let client = CalculatorGrpcClient::connect_lazy("localhost:50051", &config(Duration::from_millis(750)))
        .expect("lazy connect");
    assert_eq!(client.deadline(), Duration::from_millis(750));
}
