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
use crate::Record;

/// 4.1.2 VHF Navaid and 4.1.3 NDB Navaid record.
///
/// Both share the columns read here. An NDB has no DME, and a DME without
/// co-located VOR has no VOR coordinates.
#[derive(Record)]
#[arinc424(name = "Navaid")]
pub struct Navaid<'a> {
    pub record_type: RecordType,
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    /// `B` for an NDB and blank for a VHF navaid in the FAA's CIFP.
    pub navaid_sub_code: SubCode<'a>,
    #[arinc424(field = 7)]
    pub arpt_ident: ArptHeliIdent<'a>,
    #[arinc424(skip(3))]
    pub navaid_ident: NavaidIdent<'a>,
    #[arinc424(skip(2))]
    pub icao_code: IcaoCode<'a>,
    pub cont_nr: ContNr<'a>,
    pub frequency: Frequency<'a>,
    pub class: NavaidClass<'a>,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    pub dme_ident: NavaidIdent<'a>,
    pub dme_latitude: Latitude<'a>,
    pub dme_longitude: Longitude<'a>,
    #[arinc424(field = 94)]
    pub name: NameField<'a>,
}

impl Navaid<'_> {
    /// Returns `true` if the record is an NDB.
    pub fn is_ndb(&self) -> bool {
        self.navaid_sub_code.first() == b'B'
    }

    /// Returns `true` if the VOR or NDB coordinates are blank.
    pub fn has_no_position(&self) -> bool {
        self.latitude.is_blank() && self.longitude.is_blank()
    }
}
