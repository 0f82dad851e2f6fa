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

//! Common date and time functions.

use chrono::{DateTime, SecondsFormat, Utc};

/// Returns the current wall-clock time as UNIX milliseconds.
///
/// Clocks set before the UNIX epoch yield zero.
#[must_use]
pub fn unix_millis_now() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Converts UNIX milliseconds to an ISO 8601 (RFC 3339) string with millisecond
/// precision and a `Z` suffix, e.g. `2023-12-18T00:00:00.123Z`.
///
/// Values beyond the representable range clamp to the UNIX epoch.
#[must_use]
pub fn unix_millis_to_iso8601(unix_millis: u64) -> String {
    let millis = i64::try_from(unix_millis).unwrap_or(0);
    let datetime = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH);
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns the current UTC time as an ISO 8601 string with millisecond precision.
#[must_use]
pub fn iso8601_now() -> String {
    unix_millis_to_iso8601(unix_millis_now())
}
