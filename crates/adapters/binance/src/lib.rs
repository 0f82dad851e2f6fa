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

//! Integration with the [Binance](https://www.binance.com) Spot REST API.
//!
//! The `gateway-binance` crate provides the pieces the gateway needs to talk to Binance:
//!
//! - [`common::credential::Credential`]: request-scoped API key/secret pair.
//! - [`http::query`]: ordered query building and `SIGNED` endpoint signatures.
//! - [`http::client::BinanceHttpClient`]: the `ping` and `account` endpoints.
//!
//! The official API reference can be found at
//! <https://developers.binance.com/docs/binance-spot-api-docs/rest-api>.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod http;
