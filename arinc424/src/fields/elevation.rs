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

use crate::{Error, Numeric};

/// 5.55 Airport Elevation and 5.68 Landing Threshold Elevation in feet.
///
/// Elevations below mean sea level carry a leading minus sign.
pub type Elevation<'a> = Numeric<'a, 5>;

impl<'a> Elevation<'a> {
    /// Returns the elevation in feet.
    ///
    /// # Errors
    ///
    /// Returns an error if the field isn't a signed number.
    pub fn feet(&self) -> Result<i32, Error> {
        parse_signed!("Elevation", i32, self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn parses_elevation() {
        let elev = Elevation::from_bytes(b"00013").expect("elevation should parse");
        assert_eq!(elev.feet(), Ok(13));

        let elev = Elevation::from_bytes(b"-0012").expect("elevation should parse");
        assert_eq!(elev.feet(), Ok(-12));
    }

    #[test]
    fn fails_on_blank_elevation() {
        let elev = Elevation::from_bytes(b"     ").expect("elevation should parse");
        assert_eq!(
            elev.feet(),
            Err(Error::NotANumber {
                field: "Elevation",
                bytes: b"     ".to_vec()
            })
        );
    }
}
