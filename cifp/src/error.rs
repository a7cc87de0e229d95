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
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The CIFP isn't made of fixed-length lines.
    Format(arinc424::Error),
    /// A record has a field that can't be decoded.
    InvalidRecord {
        /// The 1-based line number of the record.
        line: usize,
        /// The name of the record type.
        record: &'static str,
        error: arinc424::Error,
    },
    /// The named entry isn't found in the archive.
    MissingEntry {
        name: String,
    },
    Archive(zip::result::ZipError),
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl Error {
    /// Returns `true` if the input is structurally broken, i.e. a line has
    /// the wrong length.
    pub fn is_structural(&self) -> bool {
        match self {
            Self::Format(e) => e.is_structural(),
            Self::InvalidRecord { error, .. } => error.is_structural(),
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => write!(f, "invalid CIFP: {e}"),
            Self::InvalidRecord {
                line,
                record,
                error,
            } => write!(f, "invalid {record} record in line {line}: {error}"),
            Self::MissingEntry { name } => write!(f, "archive has no entry {name:?}"),
            Self::Archive(e) => write!(f, "invalid archive: {e}"),
            Self::Io(e) => write!(f, "{e}"),
            Self::Serialize(e) => write!(f, "serialization failed: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::InvalidRecord { error, .. } => Some(error),
            Self::MissingEntry { .. } => None,
            Self::Archive(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Serialize(e) => Some(e),
        }
    }
}

impl From<arinc424::Error> for Error {
    fn from(e: arinc424::Error) -> Self {
        Self::Format(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Archive(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_line() {
        let e = Error::InvalidRecord {
            line: 7,
            record: "Airport",
            error: arinc424::Error::NotANumber {
                field: "Elevation",
                bytes: b"     ".to_vec(),
            },
        };

        assert_eq!(
            e.to_string(),
            "invalid Airport record in line 7: Elevation should be a number but is \"     \""
        );
        assert!(!e.is_structural());
    }
}
