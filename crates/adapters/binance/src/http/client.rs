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

//! Provides the HTTP client integration for the [Binance](https://binance.com) Spot REST API.
//!
//! Binance API reference <https://developers.binance.com/docs/binance-spot-api-docs/rest-api>.

use std::{collections::HashMap, fmt::Debug};

use gateway_core::{consts::GATEWAY_USER_AGENT, datetime::unix_millis_now};
use gateway_network::http::{HttpClient, HttpResponse};
use serde::de::DeserializeOwned;

use super::{
    error::BinanceHttpError,
    models::{BinanceAccountInfo, BinanceBalance},
    query::{AccountParams, SignedQuery},
};
use crate::common::{
    consts::{
        BINANCE_ACCOUNT_PATH, BINANCE_API_KEY_HEADER, BINANCE_DEFAULT_RECV_WINDOW_MS,
        BINANCE_PING_PATH,
    },
    credential::Credential,
    enums::BinanceEnvironment,
    urls::resolve_http_base_url,
};

/// HTTP client for the Binance Spot REST API.
///
/// The client holds no credentials: every authenticated call takes a [`Credential`]
/// scoped to that call. Each method makes exactly one request with no retries.
#[derive(Clone)]
pub struct BinanceHttpClient {
    base_url: String,
    client: HttpClient,
    recv_window_ms: u64,
}

impl Debug for BinanceHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceHttpClient")
            .field("base_url", &self.base_url)
            .field("recv_window_ms", &self.recv_window_ms)
            .field("timeout", &self.client.timeout())
            .finish()
    }
}

impl BinanceHttpClient {
    /// Creates a new [`BinanceHttpClient`].
    ///
    /// `base_url` overrides the URL resolved from `environment`. `timeout_secs` bounds
    /// every request and `recv_window_ms` is sent with every signed request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        environment: BinanceEnvironment,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        recv_window_ms: Option<u64>,
    ) -> Result<Self, BinanceHttpError> {
        let base_url = resolve_http_base_url(environment, base_url.as_deref());
        let client = HttpClient::new(Self::default_headers(), timeout_secs)?;

        Ok(Self {
            base_url,
            client,
            recv_window_ms: recv_window_ms.unwrap_or(BINANCE_DEFAULT_RECV_WINDOW_MS),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the `recvWindow` sent with signed requests.
    #[must_use]
    pub const fn recv_window_ms(&self) -> u64 {
        self.recv_window_ms
    }

    fn default_headers() -> HashMap<String, String> {
        HashMap::from([
            ("User-Agent".to_string(), GATEWAY_USER_AGENT.to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ])
    }

    fn auth_headers(credential: &Credential) -> HashMap<String, String> {
        HashMap::from([(
            BINANCE_API_KEY_HEADER.to_string(),
            credential.api_key().to_string(),
        )])
    }

    /// Builds the signed query for `GET /api/v3/account` at `timestamp_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`BinanceHttpError::InvalidCredentials`] if the credential cannot sign.
    pub fn account_query(
        &self,
        credential: &Credential,
        timestamp_ms: u64,
    ) -> Result<SignedQuery, BinanceHttpError> {
        AccountParams::new(timestamp_ms)
            .with_recv_window(self.recv_window_ms)
            .to_query()
            .sign(credential)
    }

    async fn send_get(
        &self,
        path: &str,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, BinanceHttpError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(url, headers).await?;

        if !response.status.is_success() {
            let error =
                BinanceHttpError::from_rejected_response(response.status.as_u16(), &response.body);
            tracing::warn!(
                "Binance rejected request to {}: status={}, error={error}",
                path.split('?').next().unwrap_or(path),
                response.status.as_u16(),
            );
            return Err(error);
        }

        Ok(response)
    }

    async fn send_get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: Option<HashMap<String, String>>,
    ) -> Result<T, BinanceHttpError> {
        let response = self.send_get(path, headers).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    // =========================================================================
    // Low-level HTTP API methods
    // =========================================================================

    /// Tests connectivity to the REST API.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange is unreachable or answers with a non-2xx status.
    ///
    /// # References
    ///
    /// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/general-endpoints#test-connectivity>
    pub async fn http_ping(&self) -> Result<(), BinanceHttpError> {
        self.send_get(BINANCE_PING_PATH, None).await?;
        Ok(())
    }

    /// Fetches current account information, signed with `credential` at the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails, the exchange is unreachable, rejects the
    /// request, or the response cannot be parsed.
    ///
    /// # References
    ///
    /// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/account-endpoints#account-information-user_data>
    pub async fn http_get_account(
        &self,
        credential: &Credential,
    ) -> Result<BinanceAccountInfo, BinanceHttpError> {
        self.http_get_account_at(credential, unix_millis_now()).await
    }

    /// Fetches account information with an explicit request `timestamp_ms`.
    ///
    /// # Errors
    ///
    /// See [`BinanceHttpClient::http_get_account`].
    pub async fn http_get_account_at(
        &self,
        credential: &Credential,
        timestamp_ms: u64,
    ) -> Result<BinanceAccountInfo, BinanceHttpError> {
        let query = self.account_query(credential, timestamp_ms)?;
        let path = format!("{BINANCE_ACCOUNT_PATH}?{query}");

        self.send_get_json(&path, Some(Self::auth_headers(credential)))
            .await
    }

    // =========================================================================
    // High-level methods
    // =========================================================================

    /// Fetches the balance of a single `asset`.
    ///
    /// Returns `Ok(None)` when the account does not list the asset.
    ///
    /// # Errors
    ///
    /// See [`BinanceHttpClient::http_get_account`].
    pub async fn request_balance(
        &self,
        credential: &Credential,
        asset: &str,
    ) -> Result<Option<BinanceBalance>, BinanceHttpError> {
        let account = self.http_get_account(credential).await?;
        Ok(account.balance(asset).cloned())
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
    fn test_new_resolves_environment_url() {
        let client = BinanceHttpClient::new(BinanceEnvironment::Testnet, None, None, None).unwrap();

        assert_eq!(client.base_url(), "https://testnet.binance.vision");
        assert_eq!(client.recv_window_ms(), 60_000);
    }

    #[rstest]
    fn test_new_with_overrides() {
        let client = BinanceHttpClient::new(
            BinanceEnvironment::Mainnet,
            Some("http://127.0.0.1:9000/".to_string()),
            Some(5),
            Some(5_000),
        )
        .unwrap();

        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
        assert_eq!(client.recv_window_ms(), 5_000);
    }

    #[rstest]
    fn test_account_query_uses_configured_recv_window() {
        let client =
            BinanceHttpClient::new(BinanceEnvironment::Mainnet, None, None, Some(5_000)).unwrap();
        let credential = Credential::new("test_api_key", "test_secret").unwrap();

        let query = client.account_query(&credential, 1_700_000_000_000).unwrap();

        assert_eq!(query.query(), "timestamp=1700000000000&recvWindow=5000");
        assert_eq!(
            query.signature(),
            "48f6f81f4ed69a854c31962777fe57326ed652da63c364aee689754845b41aca"
        );
    }

    #[rstest]
    fn test_debug_output() {
        let client = BinanceHttpClient::new(BinanceEnvironment::Mainnet, None, None, None).unwrap();

        let debug = format!("{client:?}");

        assert!(debug.contains("https://api.binance.com"));
        assert!(debug.contains("recv_window_ms: 60000"));
    }
}
