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

use crate::Alphanumeric;

/// 5.46 Runway Identifier (RUNWAY ID)
pub type RunwayId<'a> = Alphanumeric<'a, 5>;

impl<'a> RunwayId<'a> {
    /// Returns the runway's designator without the `RW` prefix.
    ///
    /// The designator keeps its leading zero, e.g. `RW04L` becomes `04L`.
    /// Identifiers without prefix are returned trimmed.
    pub fn designator(&self) -> String {
        let ident = self.as_str();
        ident.strip_prefix("RW").unwrap_or(&ident).trim().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn parses_designator() {
        let rwy = RunwayId::from_bytes(b"RW36L".as_slice()).expect("runway should parse");
        assert_eq!(rwy.designator(), "36L");

        let rwy = RunwayId::from_bytes(b"RW04 ".as_slice()).expect("runway should parse");
        assert_eq!(rwy.designator(), "04");
    }

    #[test]
    fn keeps_designator_without_prefix() {
        // there are runways with designator just being N, S, etc.
        let rwy = RunwayId::from_bytes(b"N    ".as_slice()).expect("runway should parse");
        assert_eq!(rwy.designator(), "N");
    }
}
