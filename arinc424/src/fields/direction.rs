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

use crate::{Error, FixedField};

/// 5.115 Direction Restriction
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum DirectionRestriction {
    /// The route can be flown in both directions.
    #[default]
    None,
    /// Only in the direction of increasing sequence numbers.
    Forward,
    /// Only in the direction of decreasing sequence numbers.
    Backward,
}

impl FixedField<'_> for DirectionRestriction {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes.first().copied().unwrap_or(b' ') {
            b' ' => Ok(Self::None),
            b'F' => Ok(Self::Forward),
            b'B' => Ok(Self::Backward),
            byte => Err(Error::InvalidCharacter {
                field: "Direction Restriction",
                byte,
                expected: "F, B or blank",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direction() {
        assert_eq!(
            DirectionRestriction::from_bytes(b" "),
            Ok(DirectionRestriction::None)
        );
        assert_eq!(
            DirectionRestriction::from_bytes(b"F"),
            Ok(DirectionRestriction::Forward)
        );
        assert_eq!(
            DirectionRestriction::from_bytes(b"B"),
            Ok(DirectionRestriction::Backward)
        );
        assert!(DirectionRestriction::from_bytes(b"N").is_err());
    }
}
