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

//! Query string construction and signing for Binance REST requests.
//!
//! Binance verifies a `SIGNED` request against the exact query string it receives, so
//! parameters are kept in insertion order and the signature is computed over the same
//! bytes that go on the wire.
//!
//! # References
//! - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/endpoint-security-type>

use std::fmt::Display;

use crate::{
    common::{consts::BINANCE_DEFAULT_RECV_WINDOW_MS, credential::Credential},
    http::error::BinanceHttpError,
};

/// Renders ordered `(key, value)` pairs as `k1=v1&k2=v2&...`.
///
/// Values are percent-encoded as URL components (space becomes `%20`). Keys are fixed
/// ASCII parameter names and are emitted as-is.
#[must_use]
pub fn build_query<K: AsRef<str>, V: AsRef<str>>(params: &[(K, V)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_ref(), urlencoding::encode(value.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Ordered builder for Binance query strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Creates an empty [`QueryBuilder`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter; it will appear after all previously pushed parameters.
    #[must_use]
    pub fn push(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Returns `true` if no parameters have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders the query string without a signature.
    #[must_use]
    pub fn build(&self) -> String {
        build_query(&self.params)
    }

    /// Renders the query string and signs it with `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`BinanceHttpError::InvalidCredentials`] if the credential cannot sign.
    pub fn sign(&self, credential: &Credential) -> Result<SignedQuery, BinanceHttpError> {
        SignedQuery::new(self.build(), credential)
    }
}

/// A query string together with its HMAC-SHA256 signature.
///
/// Renders as `<query>&signature=<hex>` via [`Display`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedQuery {
    query: String,
    signature: String,
}

impl SignedQuery {
    /// Signs `query` with `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`BinanceHttpError::InvalidCredentials`] if the credential cannot sign.
    pub fn new(query: String, credential: &Credential) -> Result<Self, BinanceHttpError> {
        let signature = credential.sign(&query)?;
        Ok(Self { query, signature })
    }

    /// Returns the signed portion of the query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the lowercase hex signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl Display for SignedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.query.is_empty() {
            write!(f, "signature={}", self.signature)
        } else {
            write!(f, "{}&signature={}", self.query, self.signature)
        }
    }
}

/// Parameters for `GET /api/v3/account`.
///
/// # References
/// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/account-endpoints>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountParams {
    /// Request timestamp in UNIX milliseconds.
    pub timestamp: u64,
    /// Validity window in milliseconds after `timestamp`.
    pub recv_window: u64,
}

impl AccountParams {
    /// Creates [`AccountParams`] with the default `recvWindow`.
    #[must_use]
    pub const fn new(timestamp: u64) -> Self {
        Self {
            timestamp,
            recv_window: BINANCE_DEFAULT_RECV_WINDOW_MS,
        }
    }

    /// Overrides the `recvWindow`.
    #[must_use]
    pub const fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    /// Returns the ordered query for these parameters: `timestamp` then `recvWindow`.
    #[must_use]
    pub fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push("timestamp", self.timestamp)
            .push("recvWindow", self.recv_window)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_build_query_account_params() {
        let query = AccountParams::new(1_700_000_000_000).to_query().build();
        assert_eq!(query, "timestamp=1700000000000&recvWindow=60000");
    }

    #[rstest]
    fn test_build_query_is_deterministic() {
        let params = AccountParams::new(1_700_000_000_000).with_recv_window(5_000);

        let first = params.to_query().build();
        for _ in 0..100 {
            assert_eq!(params.to_query().build(), first);
        }
    }

    #[rstest]
    fn test_build_query_preserves_insertion_order() {
        let query = QueryBuilder::new()
            .push("zeta", 1)
            .push("alpha", 2)
            .push("mid", 3)
            .build();

        assert_eq!(query, "zeta=1&alpha=2&mid=3");
    }

    #[rstest]
    #[case("BTC", "BTC")]
    #[case("a b", "a%20b")]
    #[case("a&b=c", "a%26b%3Dc")]
    #[case("100%", "100%25")]
    #[case("x+y/z?", "x%2By%2Fz%3F")]
    #[case("safe-._~", "safe-._~")]
    fn test_build_query_encodes_values(#[case] value: &str, #[case] expected: &str) {
        let query = build_query(&[("v", value)]);
        assert_eq!(query, format!("v={expected}"));
    }

    #[rstest]
    fn test_build_query_empty() {
        let params: [(&str, &str); 0] = [];
        assert_eq!(build_query(&params), "");
        assert!(QueryBuilder::new().is_empty());
    }

    #[rstest]
    fn test_signed_query_matches_reference() {
        let credential = Credential::new("key", "abc").unwrap();
        let builder = QueryBuilder::new()
            .push("timestamp", 1)
            .push("recvWindow", 2);

        let signed = builder.sign(&credential).unwrap();

        assert_eq!(signed.query(), "timestamp=1&recvWindow=2");
        assert_eq!(
            signed.signature(),
            "d61e1b4f86ea151a3f9c76d5a0dc42216059ec1d4c1ceff0f5f0490ae2fdd972"
        );
        assert_eq!(
            signed.to_string(),
            "timestamp=1&recvWindow=2&signature=d61e1b4f86ea151a3f9c76d5a0dc42216059ec1d4c1ceff0f5f0490ae2fdd972"
        );
    }

    #[rstest]
    fn test_signed_account_query() {
        let credential = Credential::new("test_api_key", "test_secret").unwrap();

        let signed = AccountParams::new(1_700_000_000_000)
            .to_query()
            .sign(&credential)
            .unwrap();

        assert_eq!(
            signed.to_string(),
            "timestamp=1700000000000&recvWindow=60000&signature=89d42ee8e9c2aec3f8ca56b1df2d515a1ec9c0412c9c50e65c355aa8eb85e917"
        );
    }

    #[rstest]
    fn test_signed_query_empty_params() {
        let credential = Credential::new("key", "abc").unwrap();

        let signed = QueryBuilder::new().sign(&credential).unwrap();

        assert!(signed.to_string().starts_with("signature="));
        assert!(!signed.to_string().contains('&'));
    }
}
