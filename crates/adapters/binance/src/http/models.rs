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

//! Data transfer objects for deserializing Binance HTTP API payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single asset balance within an account.
///
/// Binance sends `free` and `locked` as decimal strings (e.g. `"1.50000000"`); they are
/// parsed into [`Decimal`] so that `free + locked` is exact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinanceBalance {
    pub asset: String,
    pub free: Decimal,
    pub locked: Decimal,
}

impl BinanceBalance {
    /// Returns `free + locked`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

/// Response payload returned by `GET /api/v3/account`.
///
/// Only the fields the gateway reads are modelled; everything else is ignored.
///
/// # References
/// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/account-endpoints>
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceAccountInfo {
    #[serde(default)]
    pub can_trade: Option<bool>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub update_time: Option<u64>,
    pub balances: Vec<BinanceBalance>,
}

impl BinanceAccountInfo {
    /// Returns the balance for `asset` (case-sensitive exact match), if listed.
    #[must_use]
    pub fn balance(&self, asset: &str) -> Option<&BinanceBalance> {
        self.balances.iter().find(|b| b.asset == asset)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
