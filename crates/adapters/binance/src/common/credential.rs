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

//! Binance API credential handling and signing helpers.
//!
//! A [`Credential`] lives for a single gateway request. It is never stored in shared
//! state, and its secret is wiped from memory when dropped.

#![allow(unused_assignments)] // Fields are used in methods, false positive from nightly

use std::fmt::Debug;

use gateway_cryptography::signing::hmac_signature_bytes;
use zeroize::ZeroizeOnDrop;

use crate::http::error::BinanceHttpError;

/// API credentials required for signing Binance `SIGNED` REST requests.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Credential {
    api_key: String,
    api_secret: Box<[u8]>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &self.masked_api_key())
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Credential {
    /// Creates a new [`Credential`] instance from the API key and secret.
    ///
    /// # Errors
    ///
    /// Returns [`BinanceHttpError::InvalidCredentials`] if either value is empty.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, BinanceHttpError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(BinanceHttpError::InvalidCredentials(
                "API key must not be empty".to_string(),
            ));
        }
        if api_secret.is_empty() {
            return Err(BinanceHttpError::InvalidCredentials(
                "API secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            api_secret: api_secret.into_bytes().into_boxed_slice(),
        })
    }

    /// Returns the API key associated with this credential.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the API key with all but its first and last four characters hidden,
    /// suitable for log output.
    #[must_use]
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }

    /// Produces the Binance HMAC-SHA256 signature for `query`.
    ///
    /// `query` must be the exact, already URL-encoded string sent on the wire,
    /// excluding the `signature` parameter itself.
    ///
    /// # Errors
    ///
    /// Returns [`BinanceHttpError::InvalidCredentials`] if the secret is empty.
    pub fn sign(&self, query: &str) -> Result<String, BinanceHttpError> {
        Ok(hmac_signature_bytes(&self.api_secret, query)?)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
