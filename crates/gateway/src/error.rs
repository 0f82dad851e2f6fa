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

//! Boundary error type mapping failures into HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gateway_binance::http::error::BinanceHttpError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced by the gateway's HTTP handlers.
///
/// Every variant renders as `{"success": false, "error": <message>}`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Failure talking to, or reported by, the upstream exchange.
    #[error(transparent)]
    Upstream(#[from] BinanceHttpError),
    /// The request body was malformed or failed validation.
    #[error("{0}")]
    BadRequest(String),
}

impl GatewayError {
    /// Returns the HTTP status this error is reported with.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        GatewayError::Upstream(BinanceHttpError::UpstreamUnreachable("connection refused".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case(
        GatewayError::Upstream(BinanceHttpError::UpstreamRejected {
            status: 401,
            code: Some(-2015),
            message: "Invalid API-key, IP, or permissions for action.".to_string(),
        }),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case(
        GatewayError::Upstream(BinanceHttpError::JsonError("expected value".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case(
        GatewayError::Upstream(BinanceHttpError::InvalidCredentials("API secret must not be empty".to_string())),
        StatusCode::BAD_REQUEST
    )]
    #[case(
        GatewayError::BadRequest("asset must not be empty".to_string()),
        StatusCode::BAD_REQUEST
    )]
    fn test_status_code(#[case] error: GatewayError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
        assert_eq!(error.into_response().status(), expected);
    }

    #[rstest]
    fn test_upstream_message_is_passed_through() {
        let error = GatewayError::Upstream(BinanceHttpError::UpstreamRejected {
            status: 400,
            code: Some(-1021),
            message: "Timestamp for this request is outside of the recvWindow.".to_string(),
        });

        assert_eq!(
            error.to_string(),
            "Timestamp for this request is outside of the recvWindow."
        );
    }
}
