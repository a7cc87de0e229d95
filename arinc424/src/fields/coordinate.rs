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

use crate::{Alphanumeric, Error};

pub type Latitude<'a> = Alphanumeric<'a, 9>;

/// Converts degrees, minutes and centiseconds into decimal degrees.
#[inline]
fn dms(deg: u16, min: u8, centisec: u32) -> f64 {
    let sec = centisec as f64 / 100.0;
    deg as f64 + min as f64 / 60.0 + sec / 3600.0
}

impl<'a> Latitude<'a> {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    ///
    /// Only the hemisphere `S` makes the latitude negative.
    ///
    /// # Errors
    ///
    /// Returns an error if degrees, minutes or seconds are no numbers.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let deg = parse_numeric!("Latitude", u16, self.0[1..3])?;
        let min = parse_numeric!("Latitude", u8, self.0[3..5])?;
        let sec = parse_numeric!("Latitude", u32, self.0[5..9])?; // includes centiseconds

        let decimal = dms(deg, min, sec);

        match self.first() {
            b'S' => Ok(-decimal),
            _ => Ok(decimal),
        }
    }
}

pub type Longitude<'a> = Alphanumeric<'a, 10>;

impl<'a> Longitude<'a> {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    ///
    /// Only the hemisphere `W` makes the longitude negative.
    ///
    /// # Errors
    ///
    /// Returns an error if degrees, minutes or seconds are no numbers.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let deg = parse_numeric!("Longitude", u16, self.0[1..4])?;
        let min = parse_numeric!("Longitude", u8, self.0[4..6])?;
        let sec = parse_numeric!("Longitude", u32, self.0[6..10])?; // includes centiseconds

        let decimal = dms(deg, min, sec);

        match self.first() {
            b'W' => Ok(-decimal),
            _ => Ok(decimal),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn parses_latitude() {
        let lat = Latitude::from_bytes(b"N40394857").expect("latitude should parse");
        assert_eq!(lat.as_decimal(), Ok(40.663491666666665));
    }

    #[test]
    fn parses_longitude() {
        let long = Longitude::from_bytes(b"W0741444230").expect("longitude should parse");
        assert_eq!(long.as_decimal(), Ok(-74.24561944444444));
    }

    #[test]
    fn hemisphere_gives_sign() {
        let south = Latitude::from_bytes(b"S33561200").expect("latitude should parse");
        let north = Latitude::from_bytes(b"N33561200").expect("latitude should parse");
        let blank = Latitude::from_bytes(b" 33561200").expect("latitude should parse");
        assert!(south.as_decimal().expect("south") < 0.0);
        assert!(north.as_decimal().expect("north") > 0.0);
        assert_eq!(blank.as_decimal(), north.as_decimal());

        let west = Longitude::from_bytes(b"W151104200").expect("longitude should parse");
        let east = Longitude::from_bytes(b"E151104200").expect("longitude should parse");
        assert_eq!(west.as_decimal().map(|d| -d), east.as_decimal());
    }

    #[test]
    fn encoded_coordinate_round_trips() {
        // 51.4775 N, 0.4614 W encoded by hand: 51°28'39.00", 0°27'41.04"
        let lat = Latitude::from_bytes(b"N51283900").expect("latitude should parse");
        let lon = Longitude::from_bytes(b"W000274104").expect("longitude should parse");

        let lat = lat.as_decimal().expect("latitude should be decimal");
        let lon = lon.as_decimal().expect("longitude should be decimal");
        assert!((lat - 51.4775).abs() < 1e-4);
        assert!((lon + 0.4614).abs() < 1e-4);
    }

    #[test]
    fn fails_on_blank_digits() {
        let lat = Latitude::from_bytes(b"N4039 857").expect("latitude should parse");
        assert_eq!(
            lat.as_decimal(),
            Err(Error::NotANumber {
                field: "Latitude",
                bytes: b" 857".to_vec()
            })
        );
    }
}
