//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_meta::{extract_client_ip, extract_referrer};

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Extract referrer and client IP from the request
/// 2. Resolve the code (lookup, expiry check, click capture)
/// 3. Return `302 Found` with the target in `Location`
///
/// The click event is recorded before the response is sent, so a stats
/// read issued after the redirect completes always sees this click.
///
/// # Errors
///
/// - `404` if the code does not exist
/// - `410` if the link has expired (no click is recorded)
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let referrer = extract_referrer(&headers);
    let ip = extract_client_ip(&headers, Some(addr));

    let target = state.link_service.resolve(&code, referrer, ip).await?;

    debug!(code, target, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}
