// SPDX-License-Identifier: Apache-2.0
// Copyright 2024 Joe Pearson
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

mod airport;
mod airway;
mod navaid;
mod runway;
mod waypoint;

pub use airport::Airport;
pub use airway::AirwayLeg;
pub use navaid::Navaid;
pub use runway::Runway;
pub use waypoint::Waypoint;

use crate::fields::{RecordType, SecCode};
use crate::record::{Record, RECORD_LENGTH};
use crate::{Error, FixedField, Lines};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum RecordKind {
    /// VHF navaid, i.e. VOR or DME, read as [`Navaid`].
    VhfNavaid,
    /// NDB, read as [`Navaid`].
    NdbNavaid,
    /// Enroute waypoint, read as [`Waypoint`].
    EnrouteWaypoint,
    /// One fix of an enroute airway, read as [`AirwayLeg`].
    EnrouteAirway,
    /// Heliport terminal waypoint, read as [`Waypoint`].
    HeliportWaypoint,
    /// Airport reference point, read as [`Airport`].
    Airport,
    /// Airport terminal waypoint, read as [`Waypoint`].
    TerminalWaypoint,
    /// Primary runway record, read as [`Runway`].
    Runway,
}

impl RecordKind {
    /// Returns the name of the record type this kind is read as.
    pub fn name(&self) -> &'static str {
        match self {
            Self::VhfNavaid | Self::NdbNavaid => <Navaid<'static> as Record<'static>>::NAME,
            Self::EnrouteAirway => <AirwayLeg<'static> as Record<'static>>::NAME,
            Self::EnrouteWaypoint | Self::HeliportWaypoint | Self::TerminalWaypoint => {
                <Waypoint<'static> as Record<'static>>::NAME
            }
            Self::Airport => <Airport<'static> as Record<'static>>::NAME,
            Self::Runway => <Runway<'static> as Record<'static>>::NAME,
        }
    }

    /// Classifies a record by its section and subsection code.
    ///
    /// Returns `None` for tailored records and for all sections that aren't
    /// read by this crate, e.g. the SID, STAR and approach procedures.
    pub fn of(record: &[u8]) -> Option<Self> {
        if record.len() < RECORD_LENGTH {
            return None;
        }

        if RecordType::from_bytes(record).ok()? != RecordType::Standard {
            return None;
        }

        // The FAA's CIFP tells VHF navaids from NDBs in column 7. The
        // subsection of enroute records is found in column 6, and in column
        // 13 for airports and heliports.
        match SecCode::from_bytes(&record[4..]).ok()? {
            SecCode::Navaid => match record[6] {
                b' ' => Some(Self::VhfNavaid),
                b'B' => Some(Self::NdbNavaid),
                _ => None,
            },
            SecCode::Enroute => match record[5] {
                b'A' => Some(Self::EnrouteWaypoint),
                b'R' => Some(Self::EnrouteAirway),
                _ => None,
            },
            SecCode::Heliport => match record[12] {
                b'C' => Some(Self::HeliportWaypoint),
                _ => None,
            },
            SecCode::Airport => match record[12] {
                b'A' => Some(Self::Airport),
                b'C' => Some(Self::TerminalWaypoint),
                // only the primary record and its first continuation carry
                // the threshold position
                b'G' if matches!(record[21], b'0' | b'1') => Some(Self::Runway),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Iterator over the records of a CIFP file.
///
/// Each item is the kind of a record and its 132 bytes without line
/// terminator. Records of other kinds are skipped. A line of invalid length
/// is returned as error and ends the iteration.
pub struct Records<'a> {
    lines: Lines<'a>,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator from a byte slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crate::arinc424::records::{Airport, RecordKind, Records};
    /// # use crate::arinc424::Error;
    /// #
    /// # fn parse_records(data: &[u8]) -> Result<(), Error> {
    /// for record in Records::new(data) {
    ///     match record? {
    ///         (RecordKind::Airport, bytes) => {
    ///             let arpt = Airport::try_from(bytes)?;
    ///             // now you can read the airport's fields or convert it
    ///             // to some other type
    ///         },
    ///         _ => {},
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            lines: Lines::new(data),
        }
    }

    /// Returns the 1-based line number of the record returned last.
    pub fn line(&self) -> usize {
        self.lines.line()
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<(RecordKind, &'a [u8]), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.lines.next() {
            let record = match line {
                Ok(line) => &line[..RECORD_LENGTH],
                Err(e) => return Some(Err(e)),
            };

            match RecordKind::of(record) {
                Some(kind) => return Some(Ok((kind, record))),
                None => log::trace!("skipping line {}", self.lines.line()),
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LINE_LENGTH;

    const AIRPORT: &[u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
    const RUNWAY: &[u8] = b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";
    const VOR: &[u8] = b"SUSAD        ABQ   K2011320VTHW N35023760W106485868ABQ N35023760W106485868E013005730      NARALBUQUERQUE                   700012407";
    const LEG: &[u8] = b"SUSAER       J10         0010ABQ  K2D 0V    OH                                     18000     45000                         800012407";

    fn with(record: &[u8], column: usize, byte: u8) -> Vec<u8> {
        let mut r = record.to_vec();
        r[column] = byte;
        r
    }

    fn file(records: &[&[u8]]) -> Vec<u8> {
        records
            .iter()
            .flat_map(|r| r.iter().chain(b"\r\n").copied())
            .collect()
    }

    #[test]
    fn classifies_records() {
        assert_eq!(RecordKind::of(AIRPORT), Some(RecordKind::Airport));
        assert_eq!(RecordKind::of(RUNWAY), Some(RecordKind::Runway));
        assert_eq!(RecordKind::of(VOR), Some(RecordKind::VhfNavaid));
        assert_eq!(RecordKind::of(LEG), Some(RecordKind::EnrouteAirway));
        assert_eq!(
            RecordKind::of(&with(VOR, 6, b'B')),
            Some(RecordKind::NdbNavaid)
        );
        // a terminal navaid has its airport in column 7
        assert_eq!(
            RecordKind::of(&with(with(VOR, 5, b'B').as_slice(), 6, b'K')),
            None
        );
        assert_eq!(
            RecordKind::of(&with(AIRPORT, 12, b'C')),
            Some(RecordKind::TerminalWaypoint)
        );
        assert_eq!(
            RecordKind::of(&with(with(AIRPORT, 4, b'H').as_slice(), 12, b'C')),
            Some(RecordKind::HeliportWaypoint)
        );
        assert_eq!(
            RecordKind::of(&with(LEG, 5, b'A')),
            Some(RecordKind::EnrouteWaypoint)
        );
    }

    #[test]
    fn names_record_types() {
        assert_eq!(RecordKind::NdbNavaid.name(), "Navaid");
        assert_eq!(RecordKind::EnrouteAirway.name(), "Enroute Airway");
        assert_eq!(RecordKind::HeliportWaypoint.name(), "Waypoint");
        assert_eq!(RecordKind::Runway.name(), "Runway");
    }

    #[test]
    fn skips_unread_records() {
        // tailored record
        assert_eq!(RecordKind::of(&with(AIRPORT, 0, b'T')), None);
        // approach procedure
        assert_eq!(RecordKind::of(&with(AIRPORT, 12, b'F')), None);
        // second runway continuation
        assert_eq!(RecordKind::of(&with(RUNWAY, 21, b'2')), None);
        // unknown section
        assert_eq!(RecordKind::of(&with(AIRPORT, 4, b'Z')), None);
    }

    #[test]
    fn iterates_records() {
        let sid = with(AIRPORT, 12, b'D');
        let data = file(&[AIRPORT, &sid, RUNWAY]);

        let mut records = Records::new(&data);
        assert_eq!(records.next(), Some(Ok((RecordKind::Airport, AIRPORT))));
        assert_eq!(records.line(), 1);
        assert_eq!(records.next(), Some(Ok((RecordKind::Runway, RUNWAY))));
        assert_eq!(records.line(), 3);
        assert_eq!(records.next(), None);
    }

    #[test]
    fn stops_on_invalid_line() {
        let mut data = file(&[AIRPORT]);
        data.extend_from_slice(&AIRPORT[1..]);
        data.extend_from_slice(b"\r\n");

        let records: Vec<_> = Records::new(&data).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            Err(Error::InvalidLineLength {
                line: 2,
                actual: LINE_LENGTH - 1
            })
        );
    }
}
