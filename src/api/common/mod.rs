//
//  freshdesk-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Freshdesk Client
//!
//! This module provides the shared types used across every resource module:
//! the [`FreshdeskError`] taxonomy, the crate-wide [`Result`] alias, shared
//! list options, and the pagination rules (kept in the `pagination`
//! submodule).
//!
//! # Overview
//!
//! - [`FreshdeskError`] - Unified error type for all API operations
//! - [`Result`] - `Result<T, FreshdeskError>` alias used throughout the crate
//! - [`ListOptions`] - Page/filter options shared by plain list endpoints
//! - Pagination constants and the page-walk state machine
//!
//! # Example
//!
//! ```rust
//! use freshdesk_client::api::common::FreshdeskError;
//!
//! fn handle<T>(result: Result<T, FreshdeskError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(FreshdeskError::NotFound(resource)) => println!("Missing: {}", resource),
//!         Err(FreshdeskError::RateLimited { retry_after, .. }) => {
//!             println!("Throttled, retry after {:?} seconds", retry_after)
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - Errors carry the remote `description`/`errors` text when the API sent one
//! - The crate performs no retries; every error surfaces to the caller as-is

use serde_json::Value;
use thiserror::Error;

mod pagination;

pub(crate) use pagination::*;

/// Crate-wide result alias.
///
/// Every fallible operation in this crate returns `Result<T>`, carrying a
/// [`FreshdeskError`] on failure.
pub type Result<T> = std::result::Result<T, FreshdeskError>;

/// Unified error type for all Freshdesk API operations.
///
/// `FreshdeskError` covers the full failure taxonomy of the client: remote
/// HTTP failures classified by status and body shape, local validation
/// failures raised before any network call, and malformed-payload failures
/// raised while building domain records.
///
/// # Variants
///
/// | Variant | Condition |
/// |---------|-----------|
/// | `BadRequest` | HTTP 400 |
/// | `Unauthorized` | HTTP 401 or an invalid-credentials marker in the body |
/// | `AccessDenied` | HTTP 403 or a login-required marker in the body |
/// | `NotFound` | HTTP 404 |
/// | `RateLimited` | HTTP 429 or a `Retry-After` header on any response |
/// | `ServerError` | HTTP 5xx |
/// | `Api` | Any other non-success status |
/// | `InvalidArgument` | Local validation failure, no network call issued |
/// | `Record` | Malformed resource payload (timestamps, enum codes) |
/// | `AttachmentRead` | Local file read failure for an upload |
/// | `Network` | Transport-level failure from `reqwest` |
///
/// # Example
///
/// ```rust
/// use freshdesk_client::FreshdeskError;
///
/// let err = FreshdeskError::NotFound("ticket 42".to_string());
/// assert_eq!(err.to_string(), "Resource not found: ticket 42");
/// ```
///
/// # Notes
///
/// - The `Network` variant converts automatically from `reqwest::Error`
/// - Callers are expected to match on the specific kind they can handle;
///   nothing is swallowed internally
#[derive(Error, Debug)]
pub enum FreshdeskError {
    /// The request was malformed or semantically invalid (HTTP 400).
    ///
    /// # Parameters
    ///
    /// - `0` - The remote description of what was wrong with the request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication failed (HTTP 401 or an explicit invalid-credentials
    /// code in the response body).
    ///
    /// # Parameters
    ///
    /// - `0` - The remote failure description
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Access to the resource is forbidden (HTTP 403 or a login-required
    /// marker in the body).
    ///
    /// Freshdesk answers with the same marker for a wrong API key and for a
    /// key that belongs to a different domain, so this variant covers the
    /// ambiguous credential-vs-domain-mismatch case.
    ///
    /// # Parameters
    ///
    /// - `0` - The remote failure description
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The requested resource does not exist (HTTP 404).
    ///
    /// # Parameters
    ///
    /// - `0` - Description of the resource that was not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The API rate limit has been reached (HTTP 429, or a `Retry-After`
    /// header present on any response).
    #[error("Rate limit exceeded, retry after {retry_after:?} seconds: {message}")]
    RateLimited {
        /// Seconds to wait before retrying, parsed from the `Retry-After`
        /// header when present and numeric.
        retry_after: Option<u64>,
        /// The remote failure description.
        message: String,
    },

    /// Freshdesk reported an internal failure (HTTP 5xx).
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// The HTTP status code (500..=599).
        status: u16,
        /// The remote failure description.
        message: String,
    },

    /// Any other non-success response without a clearer classification.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The remote failure description.
        message: String,
    },

    /// A request was rejected locally before any network call was issued.
    ///
    /// Raised for oversized search queries and for domains outside the
    /// Freshdesk managed-hosting suffix.
    ///
    /// # Parameters
    ///
    /// - `0` - Description of the invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A resource payload could not be turned into a domain record.
    ///
    /// Raised for missing or unparseable `created_at`/`updated_at`
    /// timestamps, non-object payloads, and unknown enumerated codes on
    /// accessors that do not define a fallback.
    ///
    /// # Parameters
    ///
    /// - `0` - Description of the malformed field
    #[error("Malformed record: {0}")]
    Record(String),

    /// An attachment file could not be read before upload.
    #[error("Cannot read attachment {path}: {source}")]
    AttachmentRead {
        /// The attachment path that failed to read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A network-level error occurred during the request.
    ///
    /// Connection failures, TLS problems, timeouts configured on the
    /// transport, and response-body read failures all surface here.
    ///
    /// # Parameters
    ///
    /// - `0` - The underlying `reqwest::Error`
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Options shared by plain paginated list endpoints.
///
/// Most list endpoints accept the same three knobs: a pinned page, a page
/// size, and resource-specific filter parameters passed through verbatim as
/// query pairs.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `page` | Pin a specific page; exactly one request is issued |
/// | `per_page` | Page size, defaults to 100 when unset |
/// | `extra` | Passthrough query pairs (e.g. `state=blocked`) |
///
/// # Example
///
/// ```rust
/// use freshdesk_client::api::common::ListOptions;
///
/// // Third page of blocked contacts, 50 at a time
/// let options = ListOptions {
///     page: Some(3),
///     per_page: Some(50),
///     extra: vec![("state".to_string(), "blocked".to_string())],
/// };
/// # let _ = options;
/// ```
///
/// # Notes
///
/// - When `page` is unset the walk fetches every page up to and including
///   the first one shorter than `per_page`
/// - `extra` keys the remote API does not recognize are its to reject; the
///   client forwards them untouched
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Pin a specific page number (1-indexed). One request, no walk.
    pub page: Option<u32>,

    /// Items per page. Defaults to 100 when unset.
    pub per_page: Option<u32>,

    /// Additional query pairs forwarded verbatim.
    pub extra: Vec<(String, String)>,
}

/// Extracts a human-readable failure message from an error response body.
///
/// Freshdesk error bodies come in two shapes:
///
/// ```json
/// {"description": "Validation failed", "errors": [{"field": "x", "code": "missing_field"}]}
/// ```
///
/// ```json
/// {"code": "invalid_credentials", "message": "You have to be logged in"}
/// ```
///
/// The first form yields `"{description}: {errors}"`, the second yields the
/// `message` value. Anything else falls back to the HTTP status text.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &Value) -> String {
    if let Some(errors) = body.get("errors") {
        let description = body
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("Freshdesk request failed");
        return format!("{}: {}", description, errors);
    }

    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return message.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Freshdesk request failed")
        .to_string()
}

/// Looks up the machine-readable error code of a response body.
///
/// The code appears either at the top level (`{"code": "..."}`) or on the
/// first entry of the `errors` array.
pub(crate) fn error_code(body: &Value) -> Option<&str> {
    if let Some(code) = body.get("code").and_then(Value::as_str) {
        return Some(code);
    }

    body.get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|e| e.get("code"))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_error_message_description_and_errors() {
        let body = json!({
            "description": "Validation failed",
            "errors": [{"field": "email", "code": "missing_field"}]
        });
        let message = error_message(StatusCode::BAD_REQUEST, &body);
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("missing_field"));
    }

    #[test]
    fn test_error_message_plain_message() {
        let body = json!({"message": "You have to be logged in"});
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, &body),
            "You have to be logged in"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status_text() {
        let body = json!({});
        assert_eq!(error_message(StatusCode::NOT_FOUND, &body), "Not Found");
    }

    #[test]
    fn test_error_code_top_level() {
        let body = json!({"code": "invalid_credentials", "message": "nope"});
        assert_eq!(error_code(&body), Some("invalid_credentials"));
    }

    #[test]
    fn test_error_code_nested_in_errors() {
        let body = json!({"errors": [{"field": "q", "code": "rate_limit_exceeded"}]});
        assert_eq!(error_code(&body), Some("rate_limit_exceeded"));
    }

    #[test]
    fn test_error_code_absent() {
        assert_eq!(error_code(&json!({"description": "x"})), None);
        assert_eq!(error_code(&Value::Null), None);
    }
}
