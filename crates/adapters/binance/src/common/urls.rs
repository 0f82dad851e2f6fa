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

//! Helpers for resolving Binance REST base URLs at runtime.

use super::{
    consts::{BINANCE_HTTP_TESTNET_URL, BINANCE_HTTP_URL},
    enums::BinanceEnvironment,
};

/// Returns the base HTTP endpoint for the given environment.
#[must_use]
pub const fn binance_http_base_url(environment: BinanceEnvironment) -> &'static str {
    match environment {
        BinanceEnvironment::Mainnet => BINANCE_HTTP_URL,
        BinanceEnvironment::Testnet => BINANCE_HTTP_TESTNET_URL,
    }
}

/// Resolves the base URL to use, preferring an explicit override.
///
/// A trailing `/` on the override is dropped so paths can be appended directly.
#[must_use]
pub fn resolve_http_base_url(environment: BinanceEnvironment, base_url: Option<&str>) -> String {
    match base_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => binance_http_base_url(environment).to_string(),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
