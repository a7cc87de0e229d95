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

//! Destinations for the decoded collections.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Error;

/// A destination that accepts serializable values under a name.
pub trait Sink {
    /// Stores `value` as `name`.
    fn store<T: Serialize + ?Sized>(&self, value: &T, name: &str) -> Result<(), Error>;
}

/// Writes values as JSON files into a local directory.
#[derive(Clone, Debug)]
pub struct LocalDir {
    path: PathBuf,
}

impl LocalDir {
    /// Creates a sink for the directory, which must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for LocalDir {
    fn store<T: Serialize + ?Sized>(&self, value: &T, name: &str) -> Result<(), Error> {
        let json = serde_json::to_vec(value)?;
        let path = self.path.join(name);

        fs::write(&path, &json)?;
        log::info!("wrote {} bytes to {}", json.len(), path.display());

        Ok(())
    }
}
