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

use crate::fields::*;
use crate::{Alphanumeric, Record};

/// 4.1.6 Enroute Airways record.
///
/// Each record is one fix of a route. The fixes of a route are ordered by
/// their sequence number and the last fix is marked in the waypoint
/// description code.
#[derive(Record)]
#[arinc424(name = "Enroute Airway")]
pub struct AirwayLeg<'a> {
    pub record_type: RecordType,
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    #[arinc424(field = 14)]
    pub route_ident: RouteIdent<'a>,
    #[arinc424(skip(7))]
    pub seq_nr: SeqNr<'a>,
    pub fix_ident: FixIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub fix_sec_code: Alphanumeric<'a, 1>,
    pub fix_sub_code: SubCode<'a>,
    pub cont_nr: ContNr<'a>,
    pub waypoint_desc: WaypointDescCode<'a>,
    #[arinc424(skip(1))]
    pub route_type: RouteType<'a>,
    pub level: Level,
    pub direction: DirectionRestriction,
}
