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

use crate::fields::*;
use crate::Record;

/// 4.1.4 Terminal, 4.1.4 Enroute and 4.2.2 Heliport Waypoint record.
#[derive(Record)]
#[arinc424(name = "Waypoint")]
pub struct Waypoint<'a> {
    pub record_type: RecordType,
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    /// `ENRT` for enroute waypoints, otherwise the airport or heliport.
    #[arinc424(skip(1))]
    pub regn_code: RegnCode<'a>,
    #[arinc424(field = 14)]
    pub fix_ident: FixIdent<'a>,
    #[arinc424(field = 22)]
    pub cont_nr: ContNr<'a>,
    #[arinc424(skip(4))]
    pub waypoint_type: WaypointType<'a>,
    #[arinc424(field = 33)]
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    #[arinc424(field = 99)]
    pub name_desc: NameDesc<'a>,
}
