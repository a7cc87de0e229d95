// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

/// 5.58 Runway Bearing (RWY BRG)
///
/// The magnetic bearing in tenths of a degree. True bearings, marked by a
/// trailing `T`, aren't numbers and fail to parse.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct RwyBrg(pub f32);

impl RwyBrg {
    /// Returns the bearing in degrees.
    pub fn degrees(&self) -> f32 {
        self.0
    }
}

impl FixedField<'_> for RwyBrg {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let bytes = bytes.get(..4).ok_or(Error::InvalidFieldLength {
            expected: 4,
            actual: bytes.len(),
        })?;

        let tenths = parse_numeric!("Runway Bearing", u32, bytes)?;
        Ok(Self(tenths as f32 / 10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_magnetic_north() {
        assert_eq!(RwyBrg::from_bytes(b"2302"), Ok(RwyBrg(230.2)));
        assert_eq!(RwyBrg::from_bytes(b"0040").map(|b| b.degrees()), Ok(4.0));
    }

    #[test]
    fn fails_on_true_north() {
        assert_eq!(
            RwyBrg::from_bytes(b"347T"),
            Err(Error::NotANumber {
                field: "Runway Bearing",
                bytes: b"347T".to_vec(),
            })
        );
    }

    #[test]
    fn fails_on_partial_bearing() {
        assert!(matches!(
            RwyBrg::from_bytes(b" 44 "),
            Err(Error::NotANumber {
                field: "Runway Bearing",
                ..
            })
        ));
    }
}
