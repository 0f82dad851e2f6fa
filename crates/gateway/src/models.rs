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

//! Request and response bodies of the gateway's HTTP surface.

use std::fmt::Debug;

use gateway_binance::http::models::BinanceBalance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/balance`.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    pub api_key: String,
    pub api_secret: String,
    pub asset: String,
}

impl Debug for BalanceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(BalanceRequest))
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("asset", &self.asset)
            .finish()
    }
}

/// A normalized single-asset balance.
///
/// Amounts are exact decimals internally and serialize as JSON numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResult {
    pub asset: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub free: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub locked: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl BalanceResult {
    /// Returns a zero balance for an asset the account does not hold.
    #[must_use]
    pub fn zero(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            free: Decimal::ZERO,
            locked: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

impl From<&BinanceBalance> for BalanceResult {
    fn from(balance: &BinanceBalance) -> Self {
        Self {
            asset: balance.asset.clone(),
            free: balance.free,
            locked: balance.locked,
            total: balance.total(),
        }
    }
}

/// Body of `GET /`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// Body of a successful `GET /api/ping`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub success: bool,
    pub message: String,
}

/// Body of a successful `POST /api/balance`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub success: bool,
    pub balance: BalanceResult,
}

/// Error envelope returned by every failing operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    /// Creates a failure envelope carrying `error`.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_deserialize_balance_request() {
        let request: BalanceRequest = serde_json::from_value(json!({
            "apiKey": "key",
            "apiSecret": "secret",
            "asset": "BTC"
        }))
        .unwrap();

        assert_eq!(request.api_key, "key");
        assert_eq!(request.api_secret, "secret");
        assert_eq!(request.asset, "BTC");
    }

    #[rstest]
    fn test_deserialize_balance_request_missing_field() {
        let result = serde_json::from_value::<BalanceRequest>(json!({
            "apiKey": "key",
            "asset": "BTC"
        }));
        assert!(result.is_err());
    }

    #[rstest]
    fn test_balance_request_debug_redacts_credentials() {
        let request = BalanceRequest {
            api_key: "my_api_key".to_string(),
            api_secret: "my_api_secret".to_string(),
            asset: "BTC".to_string(),
        };

        let debug = format!("{request:?}");

        assert!(!debug.contains("my_api_key"));
        assert!(!debug.contains("my_api_secret"));
        assert!(debug.contains("BTC"));
    }

    #[rstest]
    fn test_balance_result_from_binance_balance() {
        let balance = BinanceBalance {
            asset: "BTC".to_string(),
            free: dec!(1.50000000),
            locked: dec!(0.50000000),
        };

        let result = BalanceResult::from(&balance);

        assert_eq!(result.total, dec!(2));
    }

    #[rstest]
    fn test_serialize_balance_response_as_numbers() {
        let response = BalanceResponse {
            success: true,
            balance: BalanceResult {
                asset: "BTC".to_string(),
                free: dec!(1.50000000),
                locked: dec!(0.50000000),
                total: dec!(2.00000000),
            },
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "balance": {"asset": "BTC", "free": 1.5, "locked": 0.5, "total": 2.0}
            })
        );
    }

    #[rstest]
    fn test_serialize_zero_balance() {
        let value = serde_json::to_value(BalanceResult::zero("XYZ")).unwrap();

        assert_eq!(value["asset"], "XYZ");
        assert_eq!(value["free"].as_f64(), Some(0.0));
        assert_eq!(value["locked"].as_f64(), Some(0.0));
        assert_eq!(value["total"].as_f64(), Some(0.0));
    }

    #[rstest]
    fn test_serialize_error_response() {
        let value = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(value, json!({"success": false, "error": "boom"}));
    }
}
