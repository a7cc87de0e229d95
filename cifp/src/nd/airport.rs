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

use serde::{Deserialize, Serialize};

use super::Point2LL;

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Airport {
    pub name: String,
    /// Elevation in feet.
    pub elevation: i32,
    pub location: Point2LL,
    /// Runways in the order they are listed.
    pub runways: Vec<Runway>,
}

impl Airport {
    /// Returns the runway with the designator, e.g. `4L`.
    pub fn runway(&self, id: &str) -> Option<&Runway> {
        self.runways.iter().find(|rwy| rwy.id == id)
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Runway {
    /// The designator without `RW` prefix and leading zero, e.g. `4L`.
    pub id: String,
    /// Magnetic heading in degrees.
    pub heading: f32,
    pub threshold: Point2LL,
    /// Threshold elevation in feet.
    pub elevation: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_runway() {
        let rwy = Runway {
            id: String::from("4L"),
            heading: 44.0,
            threshold: [-73.78, 40.62],
            elevation: 12,
        };
        let arpt = Airport {
            runways: vec![rwy.clone()],
            ..Default::default()
        };

        assert_eq!(arpt.runway("4L"), Some(&rwy));
        assert_eq!(arpt.runway("22R"), None);
    }
}
