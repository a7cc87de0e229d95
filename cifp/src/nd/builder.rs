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

use std::collections::{BTreeMap, HashMap};

use super::*;

/// Navigation data factory, which is used to build [navigation data].
///
/// [navigation data]: super::NavigationData
#[derive(Default)]
pub struct NavigationDataBuilder {
    airports: BTreeMap<String, Airport>,
    runways: HashMap<String, Vec<Runway>>,
    navaids: BTreeMap<String, Navaid>,
    fixes: BTreeMap<String, Fix>,
    airways: BTreeMap<String, Vec<Airway>>,
}

impl NavigationDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> NavigationData {
        // add unassigned runways to airports, or to an empty airport if its
        // primary record never showed up
        for (ident, mut rwys) in self.runways.drain() {
            self.airports
                .entry(ident)
                .or_default()
                .runways
                .append(&mut rwys);
        }

        NavigationData {
            airports: self.airports,
            navaids: self.navaids,
            fixes: self.fixes,
            airways: self.airways,
        }
    }

    /// Adds the airport, keeping the runways of an airport under the same
    /// identifier.
    pub fn add_airport(&mut self, ident: String, mut arpt: Airport) {
        if let Some(prev) = self.airports.get_mut(&ident) {
            log::debug!("airport {ident} is replaced");
            arpt.runways.append(&mut prev.runways);
            *prev = arpt;
        } else {
            if let Some(mut rwys) = self.runways.remove(&ident) {
                arpt.runways.append(&mut rwys);
            }
            self.airports.insert(ident, arpt);
        }
    }

    pub fn add_runway(&mut self, ident: String, rwy: Runway) {
        match self.airports.get_mut(&ident) {
            Some(arpt) => arpt.runways.push(rwy),
            // in case we have already a runway but no airport
            None => self.runways.entry(ident).or_default().push(rwy),
        }
    }

    pub fn add_navaid(&mut self, ident: String, navaid: Navaid) {
        if let Some(prev) = self.navaids.get(&ident) {
            log::debug!("{} {ident} is replaced by {}", prev.kind, navaid.kind);
        }
        self.navaids.insert(ident, navaid);
    }

    pub fn add_fix(&mut self, ident: String, fix: Fix) {
        if self.fixes.contains_key(&ident) {
            log::debug!("fix {ident} is replaced");
        }
        self.fixes.insert(ident, fix);
    }

    pub fn add_airway(&mut self, route: String, airway: Airway) {
        self.airways.entry(route).or_default().push(airway);
    }
}
