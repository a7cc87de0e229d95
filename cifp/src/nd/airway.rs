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

use serde::de::{self, Deserializer, Unexpected};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Serializes a fieldless enum as its discriminant.
macro_rules! serde_u8 {
    ($t:ty, $expected:literal => $($n:literal : $variant:path),+) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(*self as u8)
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match u8::deserialize(deserializer)? {
                    $($n => Ok($variant),)+
                    n => Err(de::Error::invalid_value(
                        Unexpected::Unsigned(n as u64),
                        &$expected,
                    )),
                }
            }
        }
    };
}

/// The altitude band in which an airway segment can be used.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum AirwayLevel {
    #[default]
    All = 0,
    Low = 1,
    High = 2,
}

serde_u8!(AirwayLevel, "0, 1 or 2" => 0: AirwayLevel::All, 1: AirwayLevel::Low, 2: AirwayLevel::High);

/// The direction in which an airway segment can be flown.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum AirwayDirection {
    #[default]
    Any = 0,
    Forward = 1,
    Backward = 2,
}

serde_u8!(AirwayDirection, "0, 1 or 2" => 0: AirwayDirection::Any, 1: AirwayDirection::Forward, 2: AirwayDirection::Backward);

/// A fix of an airway with the restrictions of the segment starting at it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AirwayFix {
    pub fix: String,
    pub level: AirwayLevel,
    pub direction: AirwayDirection,
}

/// The fixes of an airway ordered by their sequence number.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Airway {
    pub fixes: Vec<AirwayFix>,
}

impl Airway {
    /// Returns the identifiers of the airway's fixes in order.
    pub fn idents(&self) -> impl Iterator<Item = &str> {
        self.fixes.iter().map(|f| f.fix.as_str())
    }
}
