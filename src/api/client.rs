//
//  freshdesk-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Freshdesk API
//!
//! This module provides the core HTTP client shared by every resource
//! module. It handles base-URL construction, authentication, request
//! dispatch, and the classification of failure responses into
//! [`FreshdeskError`] kinds.
//!
//! ## Features
//!
//! - Domain validation against the Freshdesk managed-hosting suffix
//! - Basic-auth injection (API key as username, fixed placeholder password)
//! - JSON and multipart request encoding
//! - Page-walking helpers for list and search endpoints
//! - Error classification with rate-limit and login-marker detection
//!
//! ## Request Lifecycle
//!
//! Every call goes through `dispatch`: the request is
//! authenticated, sent, and its response handed to the classifier, which
//! either returns the decoded JSON or raises the matching error kind. The
//! client issues exactly one network call per invocation; it never retries
//! and never caches.

use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::common::{error_code, error_message, FreshdeskError, PageWalk, Result};

/// Managed-hosting suffix every Freshdesk tenant domain ends with.
///
/// The v2 API is only served on `*.freshdesk.com` domains, never on custom
/// CNAMEs, so anything else is rejected before a request is made.
const MANAGED_SUFFIX: &str = "freshdesk.com";

/// Password sent alongside the API key for basic auth.
///
/// Freshdesk ignores the password when the username is an API key but the
/// field must not be empty.
const AUTH_PLACEHOLDER: &str = "unused_with_api_key";

/// The shared HTTP client for the Freshdesk API.
///
/// `FreshdeskClient` is the connection context every resource mapper holds a
/// reference to. It owns the base URL, the credential, and the underlying
/// `reqwest` client, and is read-only after construction, so any number of
/// mappers can share one instance across tasks.
///
/// Construction goes through [`Freshdesk`](crate::Freshdesk); the request
/// methods here are crate-internal. URL building and raw dispatch are not
/// part of the public contract.
#[derive(Debug)]
pub struct FreshdeskClient {
    /// The underlying HTTP client.
    http: Client,
    /// Fully-formed API prefix, e.g. `https://company.freshdesk.com/api/v2/`.
    base_url: Url,
    /// The tenant API key, sent as the basic-auth username.
    api_key: String,
}

impl FreshdeskClient {
    /// Creates a client for a Freshdesk tenant domain.
    ///
    /// The domain is taken as-is apart from stripping any trailing slash,
    /// and must end with the `freshdesk.com` managed-hosting suffix. The
    /// resulting API prefix is `https://<domain>/api/v2/`.
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::InvalidArgument`] without issuing any
    /// network call when the domain is outside the managed-hosting suffix
    /// or does not form a valid URL, and [`FreshdeskError::Network`] if the
    /// HTTP client cannot be built.
    pub(crate) fn new(domain: &str, api_key: &str) -> Result<Self> {
        let domain = domain.trim_end_matches('/');
        if !domain.ends_with(MANAGED_SUFFIX) {
            return Err(FreshdeskError::InvalidArgument(format!(
                "the Freshdesk API works only via freshdesk.com domains and not via custom CNAMEs, got {:?}",
                domain
            )));
        }

        let base_url = Url::parse(&format!("https://{}/api/v2/", domain))
            .map_err(|e| FreshdeskError::InvalidArgument(format!("invalid domain {:?}: {}", domain, e)))?;

        Ok(Self {
            http: build_http_client()?,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Creates a client against an explicit endpoint URL.
    ///
    /// Skips the managed-hosting check so tests and API-compatible proxies
    /// can point the client at an arbitrary base URL. A trailing slash is
    /// appended when missing so relative paths join underneath the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::InvalidArgument`] when the endpoint is not
    /// a valid absolute URL.
    pub(crate) fn with_endpoint(endpoint: &str, api_key: &str) -> Result<Self> {
        let mut endpoint = endpoint.to_string();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }

        let base_url = Url::parse(&endpoint)
            .map_err(|e| FreshdeskError::InvalidArgument(format!("invalid endpoint {:?}: {}", endpoint, e)))?;

        Ok(Self {
            http: build_http_client()?,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Returns the API prefix requests are issued against.
    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Resolves a relative resource path against the API prefix.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| FreshdeskError::InvalidArgument(format!("invalid resource path {:?}: {}", path, e)))
    }

    /// Issues a GET request and returns the decoded JSON.
    pub(crate) async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.endpoint(path)?;
        self.dispatch(self.http.get(url).query(query)).await
    }

    /// Issues a POST request with a JSON body and returns the decoded JSON.
    pub(crate) async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint(path)?;
        self.dispatch(self.http.post(url).json(body)).await
    }

    /// Issues a POST request with a multipart form body.
    ///
    /// No content type is set here: `reqwest` supplies its own
    /// `multipart/form-data` header with the generated boundary, which is
    /// exactly what the attachment endpoints require.
    pub(crate) async fn post_multipart(&self, path: &str, form: Form) -> Result<Value> {
        let url = self.endpoint(path)?;
        self.dispatch(self.http.post(url).multipart(form)).await
    }

    /// Issues a PUT request, with a JSON body when one is given.
    ///
    /// A handful of endpoints (contact restore, for one) are bodyless PUTs.
    pub(crate) async fn put_json(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = self.endpoint(path)?;
        let mut request = self.http.put(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.dispatch(request).await
    }

    /// Issues a DELETE request.
    pub(crate) async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.endpoint(path)?;
        self.dispatch(self.http.delete(url).query(query)).await
    }

    /// Walks a paginated list endpoint and concatenates all received pages.
    ///
    /// Each page is requested with `page`/`per_page` parameters merged onto
    /// the caller's filter pairs, and must decode to a JSON array. The walk
    /// obeys the termination rules of the given [`PageWalk`]; server order
    /// is preserved across pages. A failure on any page aborts the whole
    /// walk, discarding earlier pages.
    pub(crate) async fn get_paged(
        &self,
        path: &str,
        params: &[(String, String)],
        mut walk: PageWalk,
    ) -> Result<Vec<Value>> {
        let mut items = Vec::new();

        loop {
            let mut query: Vec<(String, String)> = params.to_vec();
            query.push(("page".to_string(), walk.current().to_string()));
            query.push(("per_page".to_string(), walk.per_page().to_string()));

            let page = self.get(path, &query).await?;
            let page_items = expect_array(path, page)?;
            let received = page_items.len();
            items.extend(page_items);

            if !walk.advance(received) {
                break;
            }
        }

        Ok(items)
    }

    /// Walks a search endpoint and concatenates the `results` of each page.
    ///
    /// Search pages are requested with `page` and a double-quoted `query`
    /// parameter; the page size is fixed at 30 by the API and the walk never
    /// goes past page 10. The query length guard runs before the first
    /// request.
    pub(crate) async fn get_search_paged(
        &self,
        path: &str,
        query: &str,
        mut walk: PageWalk,
    ) -> Result<Vec<Value>> {
        super::common::validate_search_query(query)?;

        let mut items = Vec::new();

        loop {
            let params = vec![
                ("page".to_string(), walk.current().to_string()),
                ("query".to_string(), format!("\"{}\"", query)),
            ];

            let page = self.get(path, &params).await?;
            let results = match page {
                Value::Object(mut envelope) => match envelope.remove("results") {
                    Some(results) => expect_array(path, results)?,
                    None => {
                        return Err(FreshdeskError::Record(format!(
                            "search response from {:?} has no results field",
                            path
                        )))
                    }
                },
                other => expect_array(path, other)?,
            };
            let received = results.len();
            items.extend(results);

            if !walk.advance(received) {
                break;
            }
        }

        Ok(items)
    }

    /// Authenticates, sends, and classifies one request.
    async fn dispatch(&self, request: RequestBuilder) -> Result<Value> {
        let request = request.basic_auth(&self.api_key, Some(AUTH_PLACEHOLDER));
        let response = request.send().await?;
        self.classify(response).await
    }

    /// Turns a raw response into decoded JSON or the matching error kind.
    ///
    /// The checks run in a fixed order because the categories overlap on
    /// the wire:
    ///
    /// 1. Decode the body as JSON, falling back to an empty payload.
    /// 2. A `Retry-After` header (on any status) or a `rate_limit_exceeded`
    ///    code raises [`FreshdeskError::RateLimited`].
    /// 3. A `require_login` marker or `invalid_credentials` code raises
    ///    [`FreshdeskError::Unauthorized`] on status 401, otherwise
    ///    [`FreshdeskError::AccessDenied`].
    /// 4. Remaining non-success statuses map 400/401/403/404/429/5xx to
    ///    their kinds, anything else to [`FreshdeskError::Api`].
    /// 5. Success returns the decoded JSON unchanged.
    async fn classify(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let retry_header = response.headers().contains_key(reqwest::header::RETRY_AFTER);
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        debug!(status = status.as_u16(), url = %response.url(), "response received");

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if retry_header || error_code(&body) == Some("rate_limit_exceeded") {
            return Err(FreshdeskError::RateLimited {
                retry_after,
                message: error_message(status, &body),
            });
        }

        let login_marker =
            body.get("require_login").is_some() || error_code(&body) == Some("invalid_credentials");
        if login_marker {
            let message = error_message(status, &body);
            return Err(if status == StatusCode::UNAUTHORIZED {
                FreshdeskError::Unauthorized(message)
            } else {
                FreshdeskError::AccessDenied(message)
            });
        }

        if status.is_success() {
            return Ok(body);
        }

        let message = error_message(status, &body);
        Err(match status.as_u16() {
            400 => FreshdeskError::BadRequest(message),
            401 => FreshdeskError::Unauthorized(message),
            403 => FreshdeskError::AccessDenied(message),
            404 => FreshdeskError::NotFound(message),
            429 => FreshdeskError::RateLimited {
                retry_after,
                message,
            },
            code @ 500..=599 => FreshdeskError::ServerError {
                status: code,
                message,
            },
            code => FreshdeskError::Api {
                status: code,
                message,
            },
        })
    }
}

/// Builds the underlying `reqwest` client with the crate user agent.
fn build_http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(format!("freshdesk-client/{}", crate::VERSION))
        .build()?;
    Ok(client)
}

/// Decodes a page payload that must be a JSON array.
fn expect_array(path: &str, page: Value) -> Result<Vec<Value>> {
    match page {
        Value::Array(items) => Ok(items),
        other => Err(FreshdeskError::Record(format!(
            "expected a JSON array from {:?}, got {}",
            path,
            json_kind(&other)
        ))),
    }
}

/// Names a JSON value's kind for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_forms_base_url() {
        let client = FreshdeskClient::new("company.freshdesk.com", "key").unwrap();
        assert_eq!(client.base_url(), "https://company.freshdesk.com/api/v2/");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = FreshdeskClient::new("company.freshdesk.com/", "key").unwrap();
        assert_eq!(client.base_url(), "https://company.freshdesk.com/api/v2/");
    }

    #[test]
    fn test_custom_cname_is_rejected() {
        let err = FreshdeskClient::new("support.example.com", "key").unwrap_err();
        assert!(matches!(err, FreshdeskError::InvalidArgument(_)));
    }

    #[test]
    fn test_endpoint_joins_relative_paths() {
        let client = FreshdeskClient::new("company.freshdesk.com", "key").unwrap();
        let url = client.endpoint("tickets/1").unwrap();
        assert_eq!(url.as_str(), "https://company.freshdesk.com/api/v2/tickets/1");
    }

    #[test]
    fn test_with_endpoint_appends_slash() {
        let client = FreshdeskClient::with_endpoint("http://127.0.0.1:9999/api/v2", "key").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999/api/v2/");
    }

    #[test]
    fn test_with_endpoint_rejects_relative_urls() {
        let err = FreshdeskClient::with_endpoint("not a url", "key").unwrap_err();
        assert!(matches!(err, FreshdeskError::InvalidArgument(_)));
    }

    #[test]
    fn test_expect_array_rejects_objects() {
        let err = expect_array("tickets", serde_json::json!({"oops": 1})).unwrap_err();
        assert!(matches!(err, FreshdeskError::Record(_)));
    }
}
