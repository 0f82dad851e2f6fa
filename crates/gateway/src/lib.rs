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

//! HTTP gateway in front of the [Binance](https://www.binance.com) Spot REST API.
//!
//! Callers supply their own API credentials on each request; the gateway signs the
//! upstream call, forwards it once and normalizes the answer into a small JSON envelope.
//! Nothing is stored between requests.
//!
//! | Method | Path           | Operation                         |
//! |--------|----------------|-----------------------------------|
//! | GET    | `/`            | Liveness, never calls upstream.   |
//! | GET    | `/api/ping`    | Upstream connectivity check.      |
//! | POST   | `/api/balance` | Signed single-asset balance query. |

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod server;
