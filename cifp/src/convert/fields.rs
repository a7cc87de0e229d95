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

use arinc424::fields;

use crate::nd::*;

/// Converts a coordinate into a point of longitude and latitude.
pub(super) fn lat_lon_to_point(
    lat: fields::Latitude,
    lon: fields::Longitude,
) -> Result<Point2LL, arinc424::Error> {
    Ok([lon.as_decimal()? as f32, lat.as_decimal()? as f32])
}

impl From<fields::Level> for AirwayLevel {
    fn from(value: fields::Level) -> Self {
        match value {
            fields::Level::AllAltitudes => Self::All,
            fields::Level::HighLevelAirwaysAltitudes => Self::High,
            fields::Level::LowLevelAirwaysAltitudes => Self::Low,
        }
    }
}

impl From<fields::DirectionRestriction> for AirwayDirection {
    fn from(value: fields::DirectionRestriction) -> Self {
        match value {
            fields::DirectionRestriction::None => Self::Any,
            fields::DirectionRestriction::Forward => Self::Forward,
            fields::DirectionRestriction::Backward => Self::Backward,
        }
    }
}
