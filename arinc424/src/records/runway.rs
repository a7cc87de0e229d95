// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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
use crate::{Numeric, Record};

/// 4.1.10 Runway primary record.
#[derive(Record)]
#[arinc424(name = "Runway")]
pub struct Runway<'a> {
    pub record_type: RecordType,
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub runway_id: RunwayId<'a>,
    #[arinc424(skip(3))]
    pub cont_nr: ContNr<'a>,
    /// Runway length in feet.
    pub runway_length: Numeric<'a, 5>,
    /// Blank for e.g. seaplane bases.
    pub rwy_brg: Option<RwyBrg>,
    #[arinc424(skip(1))]
    pub threshold_latitude: Latitude<'a>,
    pub threshold_longitude: Longitude<'a>,
    #[arinc424(field = 67)]
    pub threshold_elevation: Elevation<'a>,
}
