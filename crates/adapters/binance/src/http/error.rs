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

//! Error structures and enumerations for the Binance integration.
//!
//! Binance reports failures as a non-2xx status with a `{"code": <int>, "msg": <string>}`
//! body, described under *Error Codes* in the Spot API documentation.

use gateway_cryptography::CryptoError;
use gateway_network::http::HttpClientError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Long upstream bodies (e.g. HTML error pages) are cut to this many characters
const MAX_BODY_SNIPPET_CHARS: usize = 256;

/// Represents the JSON structure of an error response returned by the Binance API.
///
/// # References
/// - <https://developers.binance.com/docs/binance-spot-api-docs/errors>
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BinanceErrorResponse {
    /// Error code returned by Binance, e.g. `-1022` for an invalid signature.
    pub code: i64,
    /// A human-readable explanation of the error condition.
    pub msg: String,
}

/// A typed error enumeration for the Binance HTTP client.
#[derive(Debug, Clone, Error)]
pub enum BinanceHttpError {
    /// The API key or secret was missing or empty.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    /// The exchange could not be reached (connect failure, timeout, broken transfer).
    #[error("{0}")]
    UpstreamUnreachable(String),
    /// The exchange answered with a non-2xx status.
    ///
    /// `message` is the exchange's own `msg` when the body carried one.
    #[error("{message}")]
    UpstreamRejected {
        status: u16,
        code: Option<i64>,
        message: String,
    },
    /// A 2xx response body could not be parsed.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl BinanceHttpError {
    /// Builds an [`BinanceHttpError::UpstreamRejected`] from a raw non-2xx response.
    #[must_use]
    pub fn from_rejected_response(status: u16, body: &[u8]) -> Self {
        if let Ok(error) = serde_json::from_slice::<BinanceErrorResponse>(body) {
            return Self::UpstreamRejected {
                status,
                code: Some(error.code),
                message: error.msg,
            };
        }

        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        let message = if text.is_empty() {
            format!("Request failed with status code {status}")
        } else {
            let snippet: String = text.chars().take(MAX_BODY_SNIPPET_CHARS).collect();
            format!("Request failed with status code {status}: {snippet}")
        };

        Self::UpstreamRejected {
            status,
            code: None,
            message,
        }
    }

    /// Returns `true` if the error originated from caller-supplied input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidCredentials(_))
    }
}

impl From<HttpClientError> for BinanceHttpError {
    fn from(error: HttpClientError) -> Self {
        Self::UpstreamUnreachable(error.to_string())
    }
}

impl From<CryptoError> for BinanceHttpError {
    fn from(error: CryptoError) -> Self {
        match error {
            CryptoError::InvalidCredentials => {
                Self::InvalidCredentials("API secret must not be empty".to_string())
            }
        }
    }
}

impl From<serde_json::Error> for BinanceHttpError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
