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

use arinc424::records;

use super::fields::lat_lon_to_point;
use crate::nd::*;

impl<'a> TryFrom<records::Airport<'a>> for Airport {
    type Error = arinc424::Error;

    fn try_from(arpt: records::Airport) -> Result<Self, Self::Error> {
        Ok(Airport {
            name: arpt.airport_name.to_string(),
            elevation: arpt.elevation.feet()?,
            location: lat_lon_to_point(arpt.latitude, arpt.longitude)?,
            runways: Vec::new(),
        })
    }
}

impl<'a> TryFrom<records::Runway<'a>> for Runway {
    type Error = arinc424::Error;

    fn try_from(rwy: records::Runway) -> Result<Self, Self::Error> {
        let designator = rwy.runway_id.designator();
        let heading = rwy.rwy_brg.ok_or(arinc424::Error::InvalidVariant {
            field: "Runway Bearing",
            bytes: b"    ".to_vec(),
            expected: "magnetic or true bearing",
        })?;

        Ok(Runway {
            id: designator.strip_prefix('0').unwrap_or(&designator).to_string(),
            heading: heading.degrees(),
            threshold: lat_lon_to_point(rwy.threshold_latitude, rwy.threshold_longitude)?,
            elevation: rwy.threshold_elevation.feet()?,
        })
    }
}

impl<'a> TryFrom<records::Navaid<'a>> for Navaid {
    type Error = arinc424::Error;

    fn try_from(navaid: records::Navaid) -> Result<Self, Self::Error> {
        // a DME without VOR has only the DME position
        let (kind, location) = if navaid.has_no_position() {
            (
                NavaidKind::Dme,
                lat_lon_to_point(navaid.dme_latitude, navaid.dme_longitude)?,
            )
        } else if navaid.is_ndb() {
            (
                NavaidKind::Ndb,
                lat_lon_to_point(navaid.latitude, navaid.longitude)?,
            )
        } else {
            (
                NavaidKind::Vor,
                lat_lon_to_point(navaid.latitude, navaid.longitude)?,
            )
        };

        Ok(Navaid {
            kind,
            name: navaid.name.to_string(),
            location,
        })
    }
}

impl<'a> TryFrom<records::Waypoint<'a>> for Fix {
    type Error = arinc424::Error;

    fn try_from(wp: records::Waypoint) -> Result<Self, Self::Error> {
        Ok(Fix {
            location: lat_lon_to_point(wp.latitude, wp.longitude)?,
        })
    }
}

impl<'a> From<records::AirwayLeg<'a>> for AirwayFix {
    fn from(leg: records::AirwayLeg) -> Self {
        AirwayFix {
            fix: leg.fix_ident.to_string(),
            level: leg.level.into(),
            direction: leg.direction.into(),
        }
    }
}
