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

//! Demonstration binary for the Binance HTTP client endpoints.
//!
//! Run with:
//! ```bash
//! cargo run -p gateway-binance --bin binance-http
//! ```
//!
//! For the account endpoint, set environment variables:
//! ```bash
//! export BINANCE_API_KEY=your_key
//! export BINANCE_API_SECRET=your_secret
//! export BINANCE_ENVIRONMENT=testnet
//! cargo run -p gateway-binance --bin binance-http
//! ```

use gateway_binance::{
    common::{credential::Credential, enums::BinanceEnvironment},
    http::client::BinanceHttpClient,
};
use gateway_core::env::get_env_var;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let environment = get_env_var("BINANCE_ENVIRONMENT")
        .ok()
        .and_then(|value| value.parse::<BinanceEnvironment>().ok())
        .unwrap_or_default();
    let client = BinanceHttpClient::new(environment, None, None, None)?;

    println!("=== Binance HTTP Client Demo ({environment}) ===\n");

    println!("1. Testing GET /api/v3/ping");
    match client.http_ping().await {
        Ok(()) => println!("   [OK] Binance online at {}", client.base_url()),
        Err(e) => println!("   [FAIL] {e}"),
    }

    let api_key = get_env_var("BINANCE_API_KEY").ok();
    let api_secret = get_env_var("BINANCE_API_SECRET").ok();

    let (Some(api_key), Some(api_secret)) = (api_key, api_secret) else {
        println!(
            "\n[SKIP] Skipping account endpoint (set BINANCE_API_KEY and BINANCE_API_SECRET to test)"
        );
        return Ok(());
    };

    let credential = Credential::new(api_key, api_secret)?;

    println!("\n2. Testing GET /api/v3/account");
    match client.http_get_account(&credential).await {
        Ok(account) => {
            println!(
                "   [OK] {} balances, account type {:?}",
                account.balances.len(),
                account.account_type
            );
            for balance in account.balances.iter().filter(|b| !b.total().is_zero()) {
                println!(
                    "   {}: free={} locked={} total={}",
                    balance.asset,
                    balance.free,
                    balance.locked,
                    balance.total()
                );
            }
        }
        Err(e) => println!("   [FAIL] {e}"),
    }

    Ok(())
}
