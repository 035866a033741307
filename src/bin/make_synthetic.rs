//! Copyright © 2025-2026 The Melx Authors. All Rights Reserved.
//!
//! This file is part of Melx.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//! <http://www.apache.org/licenses/LICENSE-2.0>
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Writes the built-in synthetic text corpora to the data directory.

use anyhow::Result;
use log::LevelFilter;

use melx::synth::MelSynthesizer;

fn main() -> Result<()> {
    melx::log::init(LevelFilter::Info);

    log::info!("Creating synthetic text corpora...");

    let synthesizer = MelSynthesizer::new("data");
    let paths = synthesizer.write_all()?;

    log::info!("Done! Created {} corpora in data/", paths.len());
    Ok(())
}
