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

use crate::Alphanumeric;

/// 5.17 Waypoint Description Code
pub type WaypointDescCode<'a> = Alphanumeric<'a, 4>;

impl<'a> WaypointDescCode<'a> {
    /// Returns `true` if the fix is the last one of a continuous airway.
    ///
    /// This is marked by an `E` in the second column of the code.
    pub fn is_end_of_route(&self) -> bool {
        self.0[1] == b'E'
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn detects_end_of_route() {
        let desc = WaypointDescCode::from_bytes(b"EE  ").expect("code should parse");
        assert!(desc.is_end_of_route());

        let desc = WaypointDescCode::from_bytes(b"E   ").expect("code should parse");
        assert!(!desc.is_end_of_route());
    }
}
