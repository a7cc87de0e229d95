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

use arinc424::records::{RecordKind, Records};

use crate::error::Error;
use crate::nd::*;

mod airway;
mod fields;
mod records;

pub use airway::AirwayAccumulator;

impl NavigationData {
    /// Creates navigation data from an ARINC 424 string.
    ///
    /// # Errors
    ///
    /// Fails on the first line that isn't 134 bytes long and on the first
    /// record with a field that can't be decoded. No navigation data is
    /// returned in that case.
    pub fn try_from_arinc424(data: &[u8]) -> Result<Self, Error> {
        let mut builder = NavigationData::builder();
        let mut airways = AirwayAccumulator::new();
        let mut records = Records::new(data);

        while let Some(record) = records.next() {
            let (kind, bytes) = record?;

            add_record(&mut builder, &mut airways, kind, bytes).map_err(|error| {
                Error::InvalidRecord {
                    line: records.line(),
                    record: kind.name(),
                    error,
                }
            })?;
        }

        for (route, airway) in airways.finish() {
            log::warn!(
                "airway {route} has no end of route and is dropped with {} fixes",
                airway.fixes.len()
            );
        }

        let nd = builder.build();
        log::info!(
            "decoded {} airports, {} navaids, {} fixes, {} airways",
            nd.airports().len(),
            nd.navaids().len(),
            nd.fixes().len(),
            nd.airways().len()
        );

        Ok(nd)
    }
}

fn add_record(
    builder: &mut NavigationDataBuilder,
    airways: &mut AirwayAccumulator,
    kind: RecordKind,
    bytes: &[u8],
) -> Result<(), arinc424::Error> {
    match kind {
        RecordKind::VhfNavaid | RecordKind::NdbNavaid => {
            let record = arinc424::records::Navaid::try_from(bytes)?;
            let ident = record.navaid_ident.as_str();

            // localizer and marker identifiers are too short
            if ident.len() >= 3 {
                builder.add_navaid(ident.to_string(), Navaid::try_from(record)?);
            }
        }

        RecordKind::EnrouteWaypoint
        | RecordKind::HeliportWaypoint
        | RecordKind::TerminalWaypoint => {
            let record = arinc424::records::Waypoint::try_from(bytes)?;
            let ident = record.fix_ident.to_string();
            builder.add_fix(ident, Fix::try_from(record)?);
        }

        RecordKind::EnrouteAirway => {
            let record = arinc424::records::AirwayLeg::try_from(bytes)?;
            let route = record.route_ident.as_str();
            let seq = record.seq_nr.as_u16()?;
            let end = record.waypoint_desc.is_end_of_route();

            if let Some(airway) = airways.push(&route, seq, record.into(), end) {
                builder.add_airway(route.into_owned(), airway);
            }
        }

        RecordKind::Airport => {
            let record = arinc424::records::Airport::try_from(bytes)?;
            let ident = record.arpt_ident.to_string();
            builder.add_airport(ident, Airport::try_from(record)?);
        }

        RecordKind::Runway => {
            let record = arinc424::records::Runway::try_from(bytes)?;

            // seaplane bases have no heading
            if record.rwy_brg.is_some() {
                let ident = record.arpt_ident.to_string();
                builder.add_runway(ident, Runway::try_from(record)?);
            }
        }
    }

    Ok(())
}
