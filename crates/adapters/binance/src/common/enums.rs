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

//! Enumerations for the Binance adapter.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Binance Spot API environments.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BinanceEnvironment {
    /// Live trading environment.
    #[default]
    Mainnet,
    /// Spot testnet environment.
    Testnet,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("mainnet", BinanceEnvironment::Mainnet)]
    #[case("Testnet", BinanceEnvironment::Testnet)]
    #[case("TESTNET", BinanceEnvironment::Testnet)]
    fn test_environment_from_str(#[case] input: &str, #[case] expected: BinanceEnvironment) {
        assert_eq!(BinanceEnvironment::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_environment_from_str_rejects_unknown() {
        assert!(BinanceEnvironment::from_str("demo").is_err());
    }

    #[rstest]
    fn test_environment_display() {
        assert_eq!(BinanceEnvironment::Mainnet.to_string(), "mainnet");
        assert_eq!(BinanceEnvironment::Testnet.as_ref(), "testnet");
    }
}
