//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::AppError;

/// Request to create a short link.
///
/// Fields deserialize as raw JSON values so a missing field or a wrong type
/// surfaces as a domain validation error (400) instead of a body rejection
/// (422). [`into_inputs`](Self::into_inputs) does the typed coercion.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// Target URL (required, absolute http/https).
    pub url: Option<Value>,

    /// Lifetime in minutes, 1..=86400. Defaults to 30 when omitted.
    pub validity: Option<Value>,

    /// Optional custom short code.
    pub shortcode: Option<Value>,
}

impl CreateLinkRequest {
    /// Coerces the raw JSON fields into typed service inputs.
    ///
    /// Checks run in field order (url, validity, shortcode) to keep the
    /// first-failure-wins validation order of the service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a present field has the wrong
    /// JSON type.
    pub fn into_inputs(self) -> Result<(Option<String>, Option<i64>, Option<String>), AppError> {
        let url = match self.url {
            None => None,
            Some(Value::String(url)) => Some(url),
            Some(other) => {
                return Err(AppError::bad_request(
                    "\"url\" must be a string",
                    json!({ "url": other }),
                ));
            }
        };

        let validity = match self.validity {
            None => None,
            Some(value) => match value.as_i64() {
                Some(minutes) => Some(minutes),
                None => {
                    return Err(AppError::bad_request(
                        "\"validity\" must be an integer number of minutes",
                        json!({ "validity": value }),
                    ));
                }
            },
        };

        let shortcode = match self.shortcode {
            None => None,
            Some(Value::String(code)) => Some(code),
            Some(other) => {
                return Err(AppError::bad_request(
                    "\"shortcode\" must be a string",
                    json!({ "shortcode": other }),
                ));
            }
        };

        Ok((url, validity, shortcode))
    }
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    /// Fully qualified short URL, e.g. `https://s.example.com/abc1234`.
    pub short_link: String,

    /// Instant at which the link stops redirecting.
    pub expiry: DateTime<Utc>,
}
