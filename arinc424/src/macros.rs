// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Parses ASCII digits into an unsigned integer of type `$t`.
///
/// The caller picks `$t` wide enough for the number of digits.
macro_rules! parse_numeric {
    ($field:expr, $t:ty, $b:expr) => {{
        let bytes: &[u8] = &$b[..];
        if !bytes.is_empty() && bytes.iter().all(|byte| byte.is_ascii_digit()) {
            Ok(bytes
                .iter()
                .fold(0 as $t, |acc, &byte| acc * 10 + (byte & 0x0F) as $t))
        } else {
            Err($crate::Error::NotANumber {
                field: $field,
                bytes: bytes.to_vec(),
            })
        }
    }};
}

/// Parses an integer with an optional leading `+` or `-` sign.
macro_rules! parse_signed {
    ($field:expr, $t:ty, $b:expr) => {{
        let bytes: &[u8] = &$b[..];
        let (neg, digits) = match bytes.first() {
            Some(b'-') => (true, &bytes[1..]),
            Some(b'+') => (false, &bytes[1..]),
            _ => (false, bytes),
        };

        parse_numeric!($field, $t, digits)
            .map(|v: $t| if neg { -v } else { v })
            .map_err(|_| $crate::Error::NotANumber {
                field: $field,
                bytes: bytes.to_vec(),
            })
    }};
}
