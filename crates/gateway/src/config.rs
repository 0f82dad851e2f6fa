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

//! Gateway configuration, parsed from command-line flags and environment variables.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use gateway_binance::common::{
    consts::BINANCE_DEFAULT_RECV_WINDOW_MS, enums::BinanceEnvironment,
    urls::resolve_http_base_url,
};
use gateway_network::http::DEFAULT_TIMEOUT_SECS;

/// Default listen address (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 10_000;

/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration for the gateway server.
///
/// Every flag can also be supplied through the environment variable shown in `--help`.
#[derive(Clone, Debug, Parser)]
#[command(name = "binance-gateway", version, about, long_about = None)]
pub struct GatewayConfig {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Binance environment used to resolve the upstream base URL (mainnet or testnet).
    #[arg(long, env = "BINANCE_ENVIRONMENT", default_value_t = BinanceEnvironment::Mainnet)]
    pub environment: BinanceEnvironment,
    /// Explicit upstream base URL, overriding the environment's default.
    #[arg(long, env = "BINANCE_BASE_URL")]
    pub base_url: Option<String>,
    /// `recvWindow` in milliseconds sent with signed requests.
    #[arg(long, env = "BINANCE_RECV_WINDOW_MS", default_value_t = BINANCE_DEFAULT_RECV_WINDOW_MS)]
    pub recv_window_ms: u64,
    /// Timeout in seconds for each upstream request.
    #[arg(long, env = "BINANCE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
    /// Tracing filter directive, e.g. `info` or `gateway_server=debug,info`.
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: BinanceEnvironment::default(),
            base_url: None,
            recv_window_ms: BINANCE_DEFAULT_RECV_WINDOW_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Returns the socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid host '{}': {e}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Returns the upstream base URL after applying any override.
    #[must_use]
    pub fn upstream_url(&self) -> String {
        resolve_http_base_url(self.environment, self.base_url.as_deref())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
