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

use std::collections::BTreeMap;

use crate::nd::{Airway, AirwayFix};

/// Collects the fixes of airways until their end of route.
///
/// Each route is collected on its own, so the fixes of two routes can be
/// pushed in any order. Within a route, fixes are ordered by their sequence
/// number and a fix pushed twice under the same number replaces the earlier
/// one.
///
/// # Examples
///
/// ```
/// use cifp::{AirwayAccumulator, AirwayDirection, AirwayFix, AirwayLevel};
///
/// let fix = |ident: &str| AirwayFix {
///     fix: ident.to_string(),
///     level: AirwayLevel::All,
///     direction: AirwayDirection::Any,
/// };
///
/// let mut airways = AirwayAccumulator::new();
/// assert_eq!(airways.push("V1", 20, fix("B"), false), None);
/// let v1 = airways.push("V1", 10, fix("A"), true).unwrap();
///
/// assert_eq!(v1.idents().collect::<Vec<_>>(), ["A", "B"]);
/// assert!(airways.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AirwayAccumulator {
    routes: BTreeMap<String, BTreeMap<u16, AirwayFix>>,
}

impl AirwayAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the fix with sequence number `seq` to the route.
    ///
    /// If `end` is set, the fix closes the route and its airway is returned.
    /// The next fix of the same route starts a new airway.
    pub fn push(&mut self, route: &str, seq: u16, fix: AirwayFix, end: bool) -> Option<Airway> {
        match self.routes.get_mut(route) {
            Some(legs) => {
                legs.insert(seq, fix);
            }
            None => {
                self.routes
                    .insert(route.to_string(), BTreeMap::from([(seq, fix)]));
            }
        }

        if !end {
            return None;
        }

        self.routes.remove(route).map(|legs| Airway {
            fixes: legs.into_values().collect(),
        })
    }

    /// Returns `true` if no route is open.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the routes that never reached their end, ordered by route.
    pub fn finish(self) -> Vec<(String, Airway)> {
        self.routes
            .into_iter()
            .map(|(route, legs)| {
                (
                    route,
                    Airway {
                        fixes: legs.into_values().collect(),
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd::{AirwayDirection, AirwayLevel};

    fn fix(ident: &str) -> AirwayFix {
        AirwayFix {
            fix: String::from(ident),
            level: AirwayLevel::All,
            direction: AirwayDirection::Any,
        }
    }

    fn idents(airway: &Airway) -> Vec<&str> {
        airway.idents().collect()
    }

    #[test]
    fn orders_by_sequence_number() {
        let mut airways = AirwayAccumulator::new();
        assert_eq!(airways.push("J10", 20, fix("C"), false), None);
        assert_eq!(airways.push("J10", 5, fix("A"), false), None);

        let j10 = airways
            .push("J10", 10, fix("B"), true)
            .expect("route should be closed");

        assert_eq!(idents(&j10), ["A", "B", "C"]);
        assert!(airways.is_empty());
    }

    #[test]
    fn groups_interleaved_routes() {
        let mut airways = AirwayAccumulator::new();
        airways.push("J10", 10, fix("A"), false);
        airways.push("V1", 10, fix("X"), false);
        airways.push("J10", 20, fix("B"), false);

        let v1 = airways
            .push("V1", 20, fix("Y"), true)
            .expect("V1 should be closed");
        let j10 = airways
            .push("J10", 30, fix("C"), true)
            .expect("J10 should be closed");

        assert_eq!(idents(&v1), ["X", "Y"]);
        assert_eq!(idents(&j10), ["A", "B", "C"]);
    }

    #[test]
    fn same_sequence_number_replaces_fix() {
        let mut airways = AirwayAccumulator::new();
        airways.push("J10", 10, fix("A"), false);

        let j10 = airways
            .push("J10", 10, fix("B"), true)
            .expect("route should be closed");

        assert_eq!(idents(&j10), ["B"]);
    }

    #[test]
    fn restarts_after_end_of_route() {
        let mut airways = AirwayAccumulator::new();
        airways.push("J10", 10, fix("A"), true);
        airways.push("J10", 10, fix("B"), false);

        let open = airways.finish();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].0, "J10");
        assert_eq!(idents(&open[0].1), ["B"]);
    }
}
