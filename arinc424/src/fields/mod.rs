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

use crate::{Alphanumeric, Numeric};

mod coordinate;
mod desc_code;
mod direction;
mod elevation;
mod level;
mod record_type;
mod runway_id;
mod rwy_brg;
mod sec_sub_code;

pub use coordinate::{Latitude, Longitude};
pub use desc_code::WaypointDescCode;
pub use direction::DirectionRestriction;
pub use elevation::Elevation;
pub use level::Level;
pub use record_type::RecordType;
pub use runway_id::RunwayId;
pub use rwy_brg::RwyBrg;
pub use sec_sub_code::{SecCode, SubCode};

pub type ArptHeliIdent<'a> = Alphanumeric<'a, 4>;
pub type ContNr<'a> = Alphanumeric<'a, 1>;
pub type FixIdent<'a> = Alphanumeric<'a, 5>;
pub type Frequency<'a> = Numeric<'a, 5>;
pub type Iata<'a> = Alphanumeric<'a, 3>;
pub type IcaoCode<'a> = Alphanumeric<'a, 2>;
pub type NameDesc<'a> = Alphanumeric<'a, 25>;
pub type NameField<'a> = Alphanumeric<'a, 30>;
pub type NavaidClass<'a> = Alphanumeric<'a, 5>;
pub type NavaidIdent<'a> = Alphanumeric<'a, 4>;
pub type RegnCode<'a> = Alphanumeric<'a, 4>;
pub type RouteIdent<'a> = Alphanumeric<'a, 5>;
pub type RouteType<'a> = Alphanumeric<'a, 1>;
pub type SeqNr<'a> = Numeric<'a, 4>;
pub type WaypointType<'a> = Alphanumeric<'a, 3>;
