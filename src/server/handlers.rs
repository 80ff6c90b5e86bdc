//! HTTP handlers.

use std::net::SocketAddr;

use axum::extract::rejection::ExtensionRejection;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::response::{message_response, IpResponse};
use super::state::AppState;
use crate::client_ip::extract_client_ip;
use crate::config::{MSG_INVALID_IP_PARAMETER, MSG_NOT_FOUND};
use crate::error_handling::LookupError;
use crate::lookup::{parse_ip, LookupResult, LookupService};

/// `GET /ip`: the caller's address.
pub async fn client_ip_handler(
    headers: HeaderMap,
    connect_info: Result<ConnectInfo<SocketAddr>, ExtensionRejection>,
) -> Json<IpResponse> {
    let remote = connect_info.ok().map(|ConnectInfo(addr)| addr.ip());
    Json(IpResponse {
        ip: extract_client_ip(&headers, remote),
    })
}

/// `GET /lookup?ip=<address>`: enrichment for one address.
///
/// The first `ip` parameter is used when several are given.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let ip = params
        .into_iter()
        .find(|(key, _)| key == "ip")
        .map(|(_, value)| value)
        .filter(|value| parse_ip(value).is_ok());

    let Some(ip) = ip else {
        return message_response(StatusCode::BAD_REQUEST, MSG_INVALID_IP_PARAMETER);
    };

    match run_lookup(state.lookup.clone(), ip).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            if e.status_code().is_server_error() {
                log::error!("Lookup failed: {e}");
            }
            e.into_response()
        }
    }
}

/// Runs the lookup on its own task so a panic in either sub-lookup becomes a
/// 500 for this request instead of a dropped connection.
async fn run_lookup(service: LookupService, ip: String) -> Result<LookupResult, LookupError> {
    tokio::spawn(async move { service.lookup(&ip).await }).await?
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found_handler() -> Response {
    message_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND)
}
