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

//! Navigation Data decoded from the CIFP.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sink::Sink;

mod airport;
mod airway;
mod builder;
mod fix;
mod navaid;

pub use airport::{Airport, Runway};
pub use airway::{Airway, AirwayDirection, AirwayFix, AirwayLevel};
pub use builder::NavigationDataBuilder;
pub use fix::Fix;
pub use navaid::{Navaid, NavaidKind};

/// A position as `[longitude, latitude]` in degrees, positive east and north.
pub type Point2LL = [f32; 2];

/// The entities of one CIFP, each keyed by its identifier.
///
/// Nothing references another collection. Runways are owned by their
/// airport, all other entities are flat.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct NavigationData {
    airports: BTreeMap<String, Airport>,
    navaids: BTreeMap<String, Navaid>,
    fixes: BTreeMap<String, Fix>,
    airways: BTreeMap<String, Vec<Airway>>,
}

impl NavigationData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> NavigationDataBuilder {
        NavigationDataBuilder::new()
    }

    /// Airports by their ICAO identifier.
    pub fn airports(&self) -> &BTreeMap<String, Airport> {
        &self.airports
    }

    /// VOR, DME and NDB by their identifier.
    pub fn navaids(&self) -> &BTreeMap<String, Navaid> {
        &self.navaids
    }

    /// Enroute, terminal and heliport waypoints by their identifier.
    pub fn fixes(&self) -> &BTreeMap<String, Fix> {
        &self.fixes
    }

    /// Airways by their route identifier.
    ///
    /// A route has more than one airway if its sequence restarts.
    pub fn airways(&self) -> &BTreeMap<String, Vec<Airway>> {
        &self.airways
    }

    /// Returns `true` if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
            && self.navaids.is_empty()
            && self.fixes.is_empty()
            && self.airways.is_empty()
    }

    /// Stores each collection under its own name, e.g. the airports as
    /// `airports.json`.
    ///
    /// # Errors
    ///
    /// Returns the first error of the sink.
    pub fn store<S: Sink>(&self, sink: &S) -> Result<(), Error> {
        sink.store(&self.airports, "airports.json")?;
        sink.store(&self.navaids, "navaids.json")?;
        sink.store(&self.fixes, "fixes.json")?;
        sink.store(&self.airways, "airways.json")
    }
}
