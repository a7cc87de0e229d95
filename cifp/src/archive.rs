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

//! Reading the CIFP out of its zip archive.

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::Error;

/// The name of the CIFP entry within the FAA's archive.
pub const CIFP_ENTRY: &str = "FAACIFP18";

/// Returns `true` if the data starts with the signature of a zip archive.
pub fn is_zip(data: &[u8]) -> bool {
    data.starts_with(b"PK\x03\x04")
}

/// Extracts the entry `name` from a zip archive.
///
/// # Errors
///
/// Returns [`Error::MissingEntry`] if the archive has no such entry.
pub fn extract(zip: &[u8], name: &str) -> Result<Vec<u8>, Error> {
    let mut archive = ZipArchive::new(Cursor::new(zip))?;

    for entry in archive.file_names() {
        log::info!("archive contains {entry}");
    }

    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => {
            return Err(Error::MissingEntry {
                name: name.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    log::info!("{name} is {} bytes after decompression", data.len());

    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    use super::*;

    fn archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        for (name, data) in entries {
            writer.start_file(*name, options).expect("entry should start");
            writer.write_all(data).expect("entry should be written");
        }

        writer.finish().expect("archive should finish").into_inner()
    }

    #[test]
    fn extracts_entry() {
        let zip = archive(&[("README", b"CIFP"), (CIFP_ENTRY, b"SUSAP KJFK")]);

        assert!(is_zip(&zip));
        assert_eq!(extract(&zip, CIFP_ENTRY).expect("entry should extract"), b"SUSAP KJFK");
    }

    #[test]
    fn fails_on_missing_entry() {
        let zip = archive(&[("README", b"CIFP")]);

        assert!(matches!(
            extract(&zip, CIFP_ENTRY),
            Err(Error::MissingEntry { name }) if name == CIFP_ENTRY
        ));
    }

    #[test]
    fn fails_on_plain_cifp() {
        let data = b"SUSAP KJFKK6AJFK     0";

        assert!(!is_zip(data));
        assert!(matches!(extract(data, CIFP_ENTRY), Err(Error::Archive(_))));
    }
}
