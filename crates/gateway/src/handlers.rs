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

//! Request handlers for the gateway routes.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use gateway_binance::common::credential::Credential;
use gateway_core::{consts::GATEWAY_VERSION, datetime::iso8601_now};

use crate::{
    error::GatewayError,
    models::{BalanceRequest, BalanceResponse, BalanceResult, LivenessResponse, PingResponse},
    server::AppState,
};

/// Message returned by `GET /api/ping` when the exchange answers.
pub const PING_OK_MESSAGE: &str = "Binance Online";

/// `GET /`: reports that the gateway process is up. Never calls upstream.
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "online".to_string(),
        message: format!("Binance gateway v{GATEWAY_VERSION}"),
        timestamp: iso8601_now(),
    })
}

/// `GET /api/ping`: checks that the upstream exchange is reachable.
///
/// # Errors
///
/// Returns [`GatewayError::Upstream`] if the exchange is unreachable or answers with a
/// non-2xx status.
pub async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, GatewayError> {
    if let Err(e) = state.binance().http_ping().await {
        tracing::warn!("Upstream ping failed: {e}");
        return Err(e.into());
    }

    Ok(Json(PingResponse {
        success: true,
        message: PING_OK_MESSAGE.to_string(),
    }))
}

/// `POST /api/balance`: looks up a single asset balance with caller-supplied credentials.
///
/// An asset the account does not hold is reported as a zero balance.
///
/// # Errors
///
/// Returns [`GatewayError::BadRequest`] for a malformed body or empty asset, and
/// [`GatewayError::Upstream`] for invalid credentials or any upstream failure.
pub async fn balance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Result<Json<BalanceResponse>, GatewayError> {
    let Json(request) = payload?;

    let credential = Credential::new(request.api_key, request.api_secret)?;
    let asset = request.asset.as_str();
    if asset.is_empty() {
        return Err(GatewayError::BadRequest(
            "asset must not be empty".to_string(),
        ));
    }

    tracing::debug!(
        "Balance request: asset={asset}, api_key={}",
        credential.masked_api_key()
    );

    let balance = match state.binance().request_balance(&credential, asset).await {
        Ok(Some(balance)) => BalanceResult::from(&balance),
        Ok(None) => BalanceResult::zero(asset),
        Err(e) => {
            tracing::warn!(
                "Balance request failed: asset={asset}, api_key={}, error={e}",
                credential.masked_api_key()
            );
            return Err(e.into());
        }
    };

    Ok(Json(BalanceResponse {
        success: true,
        balance,
    }))
}
