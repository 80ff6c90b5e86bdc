//! End-to-end tests over a real TCP socket.
//!
//! These bind an ephemeral port, serve with connect-info enabled, and drive the
//! server with reqwest, then shut it down through the graceful-shutdown future.

mod helpers;

use std::time::Duration;

use serde_json::{json, Value};
use tokio::sync::oneshot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{test_state, StubResolver};
use ip_lookup::server::{bind, serve};
use ip_lookup::{AppState, Config};

/// Serves `state` on 127.0.0.1:0 and returns the base URL plus a shutdown trigger.
async fn spawn_server(
    state: AppState,
) -> (
    String,
    oneshot::Sender<()>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
) {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    };
    let (listener, addr) = bind(&config).await.expect("Failed to bind test server");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(serve(listener, state, async move {
        let _ = shutdown_rx.await;
    }));

    (format!("http://{addr}"), shutdown_tx, handle)
}

#[tokio::test]
async fn test_ip_reports_loopback_peer() {
    let geo = MockServer::start().await;
    let (base, shutdown, handle) =
        spawn_server(test_state(&geo.uri(), StubResolver::answering(None), &["*"])).await;

    let response = reqwest::get(format!("{base}/ip")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "ip": "127.0.0.1" }));

    shutdown.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("Server did not shut down")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_lookup_round_trip_through_socket() {
    let geo = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/192.0.2.44/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "country": "EX",
            "region_code": "NP",
            "city": "Sampleton",
            "asn_org": "Example Hosting",
            "privacy": { "is_datacenter": true }
        })))
        .expect(1)
        .mount(&geo)
        .await;

    let (base, shutdown, handle) = spawn_server(test_state(
        &geo.uri(),
        StubResolver::answering(Some("edge-44.example.net")),
        &["https://dashboard.example"],
    ))
    .await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{base}/lookup"))
        .query(&[("ip", "192.0.2.44")])
        .header("Origin", "https://dashboard.example")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://dashboard.example"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["reverse"], "edge-44.example.net");
    assert_eq!(
        body["geo"],
        json!({ "country": "EX", "region": "NP", "city": "Sampleton" })
    );
    assert_eq!(body["asn"], "Example Hosting");
    assert_eq!(body["isp"], "Example Hosting");
    assert_eq!(body["flags"]["datacenter"], true);

    shutdown.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("Server did not shut down")
        .unwrap()
        .unwrap();
}
