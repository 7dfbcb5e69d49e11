//! Handler for short link creation.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 60,          // optional, minutes, default 30
///   "shortcode": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "shortLink": "https://s.example.com/abc1234",
///   "expiry": "2025-01-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `400` if the URL, validity or shortcode is invalid
/// - `409` if a custom shortcode is already taken
/// - `500` if five generated codes collide in a row
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let (url, validity, shortcode) = payload.into_inputs()?;

    let link = state
        .link_service
        .create_short_link(url, validity, shortcode)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_link: state.short_url(&link.code),
            expiry: link.expires_at,
        }),
    ))
}
