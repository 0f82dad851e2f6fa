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

//! Router construction and the server run loop.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use gateway_binance::http::{client::BinanceHttpClient, error::BinanceHttpError};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::GatewayConfig, handlers};

/// State shared by all request handlers.
///
/// Immutable after construction. Holds no credentials.
#[derive(Debug)]
pub struct AppState {
    config: GatewayConfig,
    binance: BinanceHttpClient,
}

impl AppState {
    /// Creates a new [`AppState`] with a Binance client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self, BinanceHttpError> {
        let binance = BinanceHttpClient::new(
            config.environment,
            config.base_url.clone(),
            Some(config.timeout_secs),
            Some(config.recv_window_ms),
        )?;

        Ok(Self { config, binance })
    }

    /// Returns the configuration the state was built from.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Returns the upstream Binance client.
    #[must_use]
    pub const fn binance(&self) -> &BinanceHttpClient {
        &self.binance
    }
}

/// Builds the gateway router: routes, permissive CORS and request tracing.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::liveness))
        .route("/api/ping", get(handlers::ping))
        .route("/api/balance", post(handlers::balance))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serves the gateway on `listener` until `shutdown` completes.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Binds the configured address and runs the gateway until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address is invalid, cannot be bound, or the server fails.
pub async fn run(config: GatewayConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let upstream = config.upstream_url();
    let state = Arc::new(AppState::new(config)?);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Binance gateway online on {local_addr}");
    tracing::info!("Upstream {upstream}");

    serve(listener, state, shutdown_signal()).await?;

    tracing::info!("Binance gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
