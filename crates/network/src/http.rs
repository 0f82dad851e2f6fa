// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A high-level HTTP client built on `reqwest`.

use std::{collections::HashMap, time::Duration};

use bytes::Bytes;
use gateway_cryptography::providers::install_cryptographic_provider;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
pub use reqwest::Method;
use thiserror::Error;

/// Default timeout applied to every request when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors returned by [`HttpClient`].
#[derive(Debug, Clone, Error)]
pub enum HttpClientError {
    /// The request could not be sent or its response could not be read.
    #[error("HTTP error occurred: {0}")]
    Error(String),
    /// The request did not complete within the configured timeout.
    #[error("HTTP request timed out: {0}")]
    TimeoutError(String),
    /// The underlying client could not be constructed.
    #[error("HTTP client build error: {0}")]
    ClientBuildError(String),
}

impl From<reqwest::Error> for HttpClientError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::TimeoutError(source.to_string())
        } else {
            Self::Error(error_chain(&source))
        }
    }
}

// reqwest hides the useful cause (e.g. "Connection refused") behind its source chain
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        if !message.contains(&cause_msg) {
            message.push_str(": ");
            message.push_str(&cause_msg);
        }
        source = cause.source();
    }
    message
}

/// Relevant data captured from an HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The raw response body.
    pub body: Bytes,
}

/// An HTTP client holding a shared connection pool, default headers and a timeout.
///
/// Cloning is cheap; clones share the same pool. The client holds no per-request
/// state, so a single instance may serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new [`HttpClient`].
    ///
    /// `default_headers` are sent with every request. `timeout_secs` bounds every
    /// request (connect through body read) and defaults to [`DEFAULT_TIMEOUT_SECS`].
    ///
    /// # Errors
    ///
    /// Returns an error if a default header is invalid or the client cannot be built.
    pub fn new(
        default_headers: HashMap<String, String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, HttpClientError> {
        install_cryptographic_provider();

        let timeout = Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let header_map = to_header_map(&default_headers)
            .map_err(|e| HttpClientError::ClientBuildError(e.to_string()))?;

        let client = reqwest::Client::builder()
            .default_headers(header_map)
            .timeout(timeout)
            .build()
            .map_err(|e| HttpClientError::ClientBuildError(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Returns the timeout applied to every request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends an HTTP request and reads the full response body.
    ///
    /// Non-2xx responses are returned as `Ok`; interpreting the status is left to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::TimeoutError`] if the request exceeds its timeout,
    /// or [`HttpClientError::Error`] for any other transport failure.
    pub async fn request(
        &self,
        method: Method,
        url: String,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpClientError> {
        let mut request = self.client.request(method.clone(), url.as_str());

        if let Some(headers) = headers {
            let header_map =
                to_header_map(&headers).map_err(|e| HttpClientError::Error(e.to_string()))?;
            request = request.headers(header_map);
        }

        tracing::trace!("Sending {method} {}", redact_query(&url));

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::trace!("Received {status} for {method} {}", redact_query(&url));

        Ok(HttpResponse { status, body })
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        url: String,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpClientError> {
        self.request(Method::GET, url, headers).await
    }
}

fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, http::Error> {
    let mut header_map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        header_map.insert(name, value);
    }
    Ok(header_map)
}

// Signed query strings carry signatures, keep them out of trace output
fn redact_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{
        Router,
        http::{HeaderMap as AxumHeaderMap, StatusCode as AxumStatusCode},
        routing::get,
    };
    use rstest::rstest;

    use super::*;

    async fn start_test_server() -> SocketAddr {
        let router = Router::new()
            .route("/get", get(|| async { "hello-world!" }))
            .route(
                "/echo-header",
                get(|headers: AxumHeaderMap| async move {
                    headers
                        .get("x-test")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                }),
            )
            .route(
                "/user-agent",
                get(|headers: AxumHeaderMap| async move {
                    headers
                        .get("user-agent")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                }),
            )
            .route(
                "/error",
                get(|| async { (AxumStatusCode::BAD_GATEWAY, "upstream down") }),
            )
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    "late"
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test server");
        let addr = listener.local_addr().expect("missing local addr");

        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .await
                .expect("test server failed");
        });

        addr
    }

    #[rstest]
    #[tokio::test]
    async fn test_get() {
        let addr = start_test_server().await;
        let client = HttpClient::new(HashMap::new(), None).unwrap();

        let response = client
            .get(format!("http://{addr}/get"), None)
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(String::from_utf8_lossy(&response.body), "hello-world!");
    }

    #[rstest]
    #[tokio::test]
    async fn test_request_headers_are_sent() {
        let addr = start_test_server().await;
        let client = HttpClient::new(HashMap::new(), None).unwrap();
        let headers = HashMap::from([("X-Test".to_string(), "value-1".to_string())]);

        let response = client
            .get(format!("http://{addr}/echo-header"), Some(headers))
            .await
            .unwrap();

        assert_eq!(String::from_utf8_lossy(&response.body), "value-1");
    }

    #[rstest]
    #[tokio::test]
    async fn test_default_headers_are_sent() {
        let addr = start_test_server().await;
        let defaults = HashMap::from([("User-Agent".to_string(), "gateway-test/1.0".to_string())]);
        let client = HttpClient::new(defaults, None).unwrap();

        let response = client
            .get(format!("http://{addr}/user-agent"), None)
            .await
            .unwrap();

        assert_eq!(String::from_utf8_lossy(&response.body), "gateway-test/1.0");
    }

    #[rstest]
    #[tokio::test]
    async fn test_non_success_status_is_returned() {
        let addr = start_test_server().await;
        let client = HttpClient::new(HashMap::new(), None).unwrap();

        let response = client
            .get(format!("http://{addr}/error"), None)
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(String::from_utf8_lossy(&response.body), "upstream down");
    }

    #[rstest]
    #[tokio::test]
    async fn test_timeout_maps_to_timeout_error() {
        let addr = start_test_server().await;
        let client = HttpClient::new(HashMap::new(), Some(1)).unwrap();

        let result = client.get(format!("http://{addr}/slow"), None).await;

        assert!(matches!(result, Err(HttpClientError::TimeoutError(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_connection_refused_maps_to_error() {
        // Bind then drop to obtain a port with no listener
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new(HashMap::new(), Some(2)).unwrap();
        let result = client.get(format!("http://{addr}/get"), None).await;

        match result {
            Err(HttpClientError::Error(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[rstest]
    #[case(None, DEFAULT_TIMEOUT_SECS)]
    #[case(Some(3), 3)]
    fn test_timeout(#[case] timeout_secs: Option<u64>, #[case] expected: u64) {
        let client = HttpClient::new(HashMap::new(), timeout_secs).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(expected));
    }

    #[rstest]
    fn test_invalid_default_header_fails_build() {
        let defaults = HashMap::from([("bad header".to_string(), "v".to_string())]);
        let result = HttpClient::new(defaults, None);
        assert!(matches!(result, Err(HttpClientError::ClientBuildError(_))));
    }

    #[rstest]
    #[case("http://host/api/v3/account?timestamp=1&signature=abc", "http://host/api/v3/account")]
    #[case("http://host/api/v3/ping", "http://host/api/v3/ping")]
    fn test_redact_query(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(redact_query(url), expected);
    }
}
