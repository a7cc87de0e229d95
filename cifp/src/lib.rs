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

//! Navigation data from the FAA's Coded Instrument Flight Procedures.
//!
//! The CIFP is an [ARINC 424] file. This crate decodes the airports with
//! their runways, the navaids, fixes and airways of it into
//! [`NavigationData`], which can be serialized or stored into a [`Sink`].
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), cifp::Error> {
//! let mut data = Vec::new();
//! data.extend_from_slice(b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912\r\n");
//! data.extend_from_slice(b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709\r\n");
//!
//! let nd = cifp::decode(&data)?;
//! let kjfk = &nd.airports()["KJFK"];
//!
//! assert_eq!(kjfk.name, "JOHN F KENNEDY INTL");
//! assert_eq!(kjfk.elevation, 13);
//! assert_eq!(kjfk.runway("4L").map(|rwy| rwy.heading), Some(44.0));
//! # Ok(())
//! # }
//! ```
//!
//! [ARINC 424]: arinc424

pub mod archive;
mod convert;
mod error;
mod nd;
pub mod sink;

pub use convert::AirwayAccumulator;
pub use error::Error;
pub use nd::*;
pub use sink::{LocalDir, Sink};

/// Decodes the navigation data of a CIFP.
///
/// This is a shorthand for [`NavigationData::try_from_arinc424`].
pub fn decode(data: &[u8]) -> Result<NavigationData, Error> {
    NavigationData::try_from_arinc424(data)
}
