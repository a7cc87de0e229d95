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

use crate::{Alphanumeric, Error, FixedField};

/// 5.4 Section Code (SEC CODE)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SecCode {
    MORA,
    Navaid,
    Enroute,
    Heliport,
    Airport,
    CompanyRoute,
    Table,
    Airspace,
}

impl FixedField<'_> for SecCode {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.first().copied().unwrap_or(b' ') {
            b'A' => Ok(Self::MORA),
            b'D' => Ok(Self::Navaid),
            b'E' => Ok(Self::Enroute),
            b'H' => Ok(Self::Heliport),
            b'P' => Ok(Self::Airport),
            b'R' => Ok(Self::CompanyRoute),
            b'T' => Ok(Self::Table),
            b'U' => Ok(Self::Airspace),
            byte => Err(Error::InvalidCharacter {
                field: "Section Code",
                byte,
                expected: "SEC CODE according to ARINC 424-23 5.4",
            }),
        }
    }
}

/// 5.5 Subsection Code (SUB CODE)
///
/// Its meaning depends on the section and its column on the record type.
pub type SubCode<'a> = Alphanumeric<'a, 1>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections() {
        assert_eq!(SecCode::from_bytes(b"D"), Ok(SecCode::Navaid));
        assert_eq!(SecCode::from_bytes(b"P"), Ok(SecCode::Airport));
        assert!(matches!(
            SecCode::from_bytes(b"Z"),
            Err(Error::InvalidCharacter { byte: b'Z', .. })
        ));
    }
}
