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

//! ARINC 424 navigation data parser.
//!
//! This crate provides parser for the ARINC 424 [records] with their
//! [fields] found in the FAA's Coded Instrument Flight Procedures (CIFP). Each
//! record is parsed from 132 bytes and references those. The parser tries to
//! copy as little as possible and the fields provide methods to copy or
//! convert values when needed.
//!
//! # Examples
//!
//! Lets parse John F Kennedy Intl airport and print its coordinates:
//!
//! ```
//! use arinc424::records::Airport;
//!
//! # fn main() -> Result<(), arinc424::Error> {
//! let data = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
//! let airport = Airport::try_from(data.as_slice())?;
//!
//! // now we can print the ICAO code and the position as decimals
//! let icao = airport.arpt_ident.as_str();
//! let lat = airport.latitude.as_decimal()?;
//! let lon = airport.longitude.as_decimal()?;
//! println!("{icao} at {lat:.4}, {lon:.4}"); // => "KJFK at 40.6399, -73.7786"
//! #     Ok(())
//! # }
//! ```
//!
//! A CIFP file is a sequence of lines, each holding one record followed by
//! `\r\n`. The [`Records`] iterator splits the file and tells the kind of
//! each record:
//!
//! ```no_run
//! # use arinc424::records::{Airport, RecordKind, Records};
//! # use arinc424::Error;
//! # fn main() -> Result<(), Error> {
//! // read the navigation database from file
//! let data = std::fs::read("FAACIFP18").expect("file should be readable");
//!
//! // iterate over all records but print only airports
//! for record in Records::new(&data) {
//!     if let (RecordKind::Airport, bytes) = record? {
//!         // Airport only references the bytes and gives us access to the fields
//!         let arpt = Airport::try_from(bytes)?;
//!         println!("Airport {} ({})", arpt.arpt_ident, arpt.airport_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [records]: crate::records
//! [fields]: crate::fields
//! [`Records`]: crate::records::Records

#[macro_use]
mod macros;

mod error;
mod field;
mod lines;
mod record;

pub use field::{Alphanumeric, FixedField, Numeric};
pub use lines::{Lines, LINE_LENGTH};
pub use record::{Fields, Record, RECORD_LENGTH};
// Re-export the derive macro for convenience
pub(crate) use arinc424_derive::Record;

pub mod fields;
pub mod records;
pub use error::Error;
