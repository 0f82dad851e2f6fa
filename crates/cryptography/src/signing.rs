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

//! HMAC-SHA256 request signing.

use aws_lc_rs::hmac;

use crate::error::CryptoError;

/// Generates an HMAC-SHA256 signature for the given data using the provided secret.
///
/// The secret is used as its raw UTF-8 bytes and the resulting tag is returned as a
/// lowercase hexadecimal string. The signature covers exactly the bytes of `data`, so
/// callers must sign the same string they put on the wire.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidCredentials`] if `secret` is empty.
pub fn hmac_signature(secret: &str, data: &str) -> Result<String, CryptoError> {
    hmac_signature_bytes(secret.as_bytes(), data)
}

/// Generates an HMAC-SHA256 signature for `data` keyed by raw `secret` bytes.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidCredentials`] if `secret` is empty.
pub fn hmac_signature_bytes(secret: &[u8], data: &str) -> Result<String, CryptoError> {
    if secret.is_empty() {
        return Err(CryptoError::InvalidCredentials);
    }

    let key = hmac::Key::new(hmac::HMAC_SHA256, secret);
    let tag = hmac::sign(&key, data.as_bytes());
    Ok(hex::encode(tag.as_ref()))
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
        "abc",
        "timestamp=1&recvWindow=2",
        "d61e1b4f86ea151a3f9c76d5a0dc42216059ec1d4c1ceff0f5f0490ae2fdd972"
    )]
    #[case(
        "mysecretkey",
        "data-to-sign",
        "19ed21a8b2a6b847d7d7aea059ab3134cd58f13c860cfbe89338c718685fe077"
    )]
    #[case(
        "anothersecretkey",
        "somedata",
        "fb44dab41435775b44a96aa008af58cbf1fa1cea32f4605562c586b98f7326c5"
    )]
    #[case(
        "mysecretkey",
        "",
        "bb4e89236de3b03c17e36d48ca059fa277b88165cb14813a49f082ed8974b9f4"
    )]
    #[case(
        "test_secret",
        "timestamp=1700000000000&recvWindow=60000",
        "89d42ee8e9c2aec3f8ca56b1df2d515a1ec9c0412c9c50e65c355aa8eb85e917"
    )]
    fn test_hmac_signature(
        #[case] secret: &str,
        #[case] data: &str,
        #[case] expected_signature: &str,
    ) {
        let result = hmac_signature(secret, data).unwrap();
        assert_eq!(
            result, expected_signature,
            "Expected signature did not match"
        );
    }

    // Reference example from the Binance Spot API "SIGNED endpoint security" docs
    #[rstest]
    fn test_hmac_signature_binance_reference() {
        let secret = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

        let signature = hmac_signature(secret, query).unwrap();

        assert_eq!(
            signature,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[rstest]
    #[case("")]
    #[case("data-without-secret")]
    fn test_hmac_signature_rejects_empty_secret(#[case] data: &str) {
        let result = hmac_signature("", data);
        assert_eq!(result, Err(CryptoError::InvalidCredentials));
    }

    #[rstest]
    fn test_hmac_signature_is_lowercase_hex() {
        let signature = hmac_signature("abc", "payload").unwrap();
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[rstest]
    fn test_hmac_signature_bytes_matches_str() {
        let from_str = hmac_signature("abc", "timestamp=1&recvWindow=2").unwrap();
        let from_bytes = hmac_signature_bytes(b"abc", "timestamp=1&recvWindow=2").unwrap();
        assert_eq!(from_str, from_bytes);
    }
}
