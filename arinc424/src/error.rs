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

use std::error;
use std::fmt;

use crate::LINE_LENGTH;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// A line of the input isn't 132 bytes followed by the line terminator.
    InvalidLineLength {
        /// The 1-based line number.
        line: usize,
        actual: usize,
    },
    InvalidRecordLength {
        actual: usize,
    },
    InvalidFieldLength {
        expected: usize,
        actual: usize,
    },
    InvalidCharacter {
        field: &'static str,
        byte: u8,
        expected: &'static str,
    },
    InvalidVariant {
        field: &'static str,
        bytes: Vec<u8>,
        expected: &'static str,
    },
    NotANumber {
        field: &'static str,
        bytes: Vec<u8>,
    },
}

impl Error {
    /// Returns `true` if the error is a violation of the record structure
    /// rather than of the data within a field.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InvalidLineLength { .. }
                | Self::InvalidRecordLength { .. }
                | Self::InvalidFieldLength { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLineLength { line, actual } => {
                write!(
                    f,
                    "line {line} should be {LINE_LENGTH} byte long but is {actual}"
                )
            }
            Self::InvalidRecordLength { actual } => {
                write!(f, "record should be 132 byte long but is {actual}")
            }
            Self::InvalidFieldLength { expected, actual } => {
                write!(f, "field should be {expected} byte long but is {actual}")
            }
            Self::InvalidCharacter {
                field,
                byte,
                expected,
            } => {
                write!(
                    f,
                    "{field} is \"{}\" but should be {expected}",
                    *byte as char
                )
            }
            Self::InvalidVariant {
                field,
                bytes,
                expected,
            } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "found \"{s}\" in {field} but should be {expected}")
            }
            Self::NotANumber { field, bytes } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "{field} should be a number but is \"{s}\"")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_length_names_the_line() {
        let e = Error::InvalidLineLength {
            line: 3,
            actual: 133,
        };
        assert_eq!(e.to_string(), "line 3 should be 134 byte long but is 133");
        assert!(e.is_structural());
    }

    #[test]
    fn number_error_names_the_field() {
        let e = Error::NotANumber {
            field: "Airport Elevation",
            bytes: b"00A13".to_vec(),
        };
        assert_eq!(
            e.to_string(),
            "Airport Elevation should be a number but is \"00A13\""
        );
        assert!(!e.is_structural());
    }
}
