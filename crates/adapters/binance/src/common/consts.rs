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

//! Core constants shared across the Binance adapter components.

pub const BINANCE_HTTP_URL: &str = "https://api.binance.com";
pub const BINANCE_HTTP_TESTNET_URL: &str = "https://testnet.binance.vision";

/// Header carrying the API key on `USER_DATA` and `SIGNED` endpoints.
pub const BINANCE_API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub const BINANCE_PING_PATH: &str = "/api/v3/ping";
pub const BINANCE_ACCOUNT_PATH: &str = "/api/v3/account";

/// Default `recvWindow` in milliseconds sent with signed requests.
///
/// Binance caps this at 60 000.
pub const BINANCE_DEFAULT_RECV_WINDOW_MS: u64 = 60_000;
