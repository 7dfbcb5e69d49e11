//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom caller-provided codes.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Number of symbols in a generated code.
const CODE_LENGTH: usize = 7;

/// 64-symbol URL-safe alphabet. Exactly 64 entries so masking a random byte
/// with `0x3f` selects symbols uniformly.
const CODE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Compiled regex for the shortcode character class.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,32}$").unwrap());

/// Codes reserved for service endpoints.
///
/// A link with one of these codes would be shadowed by a static route and
/// never resolve, so creation rejects them up front.
const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Generates a cryptographically secure random short code.
///
/// Draws 7 symbols from the 64-symbol alphabet `[A-Za-z0-9_-]` using
/// `getrandom` for entropy. Generation is pure and stateless: uniqueness is
/// enforced by the shortcode store, not here.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|b| CODE_ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}

/// Validates a caller-provided custom short code.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: letters, digits, `_`, `-`
/// - Cannot be a reserved service endpoint name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !SHORTCODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "\"shortcode\" must be 3-32 characters of letters, digits, '_' or '-'",
            json!({ "shortcode": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This shortcode is reserved",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}
