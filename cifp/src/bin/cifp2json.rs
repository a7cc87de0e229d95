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

//! cifp2json: Converts the FAA's CIFP into JSON files.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cifp::archive::{self, CIFP_ENTRY};
use cifp::LocalDir;

#[derive(Parser)]
#[command(
    name = "cifp2json",
    version,
    about = "Decodes the CIFP into airports, navaids, fixes and airways"
)]
struct Cli {
    /// Path to the CIFP or to the zip archive it is distributed in
    input: PathBuf,

    /// Directory the JSON files are written to
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Name of the CIFP within the zip archive
    #[arg(short, long, default_value = CIFP_ENTRY)]
    entry: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let mut data = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    log::info!("read {} bytes from {}", data.len(), cli.input.display());

    let is_archive = cli
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    if is_archive || archive::is_zip(&data) {
        data = archive::extract(&data, &cli.entry)
            .with_context(|| format!("failed to extract {}", cli.entry))?;
    }

    let nd = cifp::decode(&data).context("failed to decode CIFP")?;

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create {}", cli.out.display()))?;
    nd.store(&LocalDir::new(&cli.out))
        .context("failed to store navigation data")?;

    Ok(())
}
