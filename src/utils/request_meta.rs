//! Referrer and client IP extraction from incoming requests.
//!
//! Both values feed the click event log and are best-effort: a missing or
//! malformed header degrades to `None` rather than failing the redirect.

use axum::http::{HeaderMap, header};
use std::net::SocketAddr;

/// Extracts the referrer from request headers.
///
/// Checks the standard `Referer` header first, then the `Referrer` spelling
/// some clients send. Empty values count as absent.
pub fn extract_referrer(headers: &HeaderMap) -> Option<String> {
    let raw = headers
        .get(header::REFERER)
        .or_else(|| headers.get("referrer"))?;

    let value = raw.to_str().ok()?.trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Extracts the client IP for a request.
///
/// The first entry of `X-Forwarded-For` wins when present (the service is
/// expected to sit behind a reverse proxy), falling back to the peer address
/// of the TCP connection.
pub fn extract_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(value) = forwarded.to_str()
        && let Some(first) = value.split(',').next()
    {
        let candidate = first.trim();

        if !candidate.is_empty() {
            return Some(candidate.to_string());
        }
    }

    peer.map(|addr| addr.ip().to_string())
}
