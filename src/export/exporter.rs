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

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde_json::json;

use crate::errors::Result;
use crate::export::field::detect_text_field;
use crate::hub::MelHubProvider;

/// Configuration for the corpus exporter.
#[derive(Clone, Debug)]
pub struct MelExportConfig {
    /// Directory the JSONL files are written under, created as needed.
    pub output_dir: PathBuf,
    /// Cap on the number of exported records per dataset.
    pub max_examples: usize,
    /// Emit a progress diagnostic every this many accepted records.
    pub progress_interval: usize,
}

impl Default for MelExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data/huggingface"),
            max_examples: 10_000,
            progress_interval: 1000,
        }
    }
}

/// Exports hub datasets as JSON-lines corpus files.
///
/// One export call is a single linear pass: load the dataset, pick its text
/// field, then stream eligible records to disk in source order. The only
/// recovered failure is an unavailable dataset; filesystem errors propagate
/// and terminate the run.
pub struct MelExporter<P> {
    provider: P,
    config: MelExportConfig,
}

impl<P: MelHubProvider> MelExporter<P> {
    /// Creates an exporter over the given hub provider with defaults.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: MelExportConfig::default(),
        }
    }

    /// Replaces the exporter configuration.
    pub fn with_config(mut self, config: MelExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Exports one dataset split to a JSONL file.
    ///
    /// Returns the output path, or None when the dataset was skipped because
    /// it could not be loaded or no text field was found. Both skip causes
    /// are logged; the caller decides whether to continue with other
    /// datasets.
    pub fn export(&self, dataset_name: &str, split: &str) -> Result<Option<PathBuf>> {
        log::info!("Loading dataset: {}", dataset_name);

        let dataset = match self.provider.load(dataset_name, split) {
            Ok(dataset) => dataset,
            Err(e) => {
                log::error!("Error loading dataset: {}", e);
                return Ok(None);
            }
        };

        let text_field = match detect_text_field(&dataset) {
            Some(field) => field,
            None => {
                log::warn!("Could not find text field in dataset '{}'", dataset_name);
                return Ok(None);
            }
        };
        log::info!("Using field: {}", text_field);

        fs::create_dir_all(&self.config.output_dir)?;
        let output_path = self.output_path(dataset_name, split);
        log::info!("Writing to: {}", output_path.display());

        let file = File::create(&output_path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0usize;

        for record in &dataset {
            if count >= self.config.max_examples {
                break;
            }

            // The emptiness check trims, the stored value stays verbatim.
            let text = match record.text(&text_field) {
                Some(value) if !value.trim().is_empty() => value,
                _ => continue,
            };

            let line = serde_json::to_string(&json!({ "text": text }))?;
            writeln!(writer, "{}", line)?;
            count += 1;

            if count % self.config.progress_interval == 0 {
                log::info!("  Processed {} examples", count);
            }
        }

        writer.flush()?;
        log::info!("Saved {} examples to {}", count, output_path.display());
        Ok(Some(output_path))
    }

    /// Derives the output file name: slashes in the dataset name become
    /// underscores, suffixed with the split.
    fn output_path(&self, dataset_name: &str, split: &str) -> PathBuf {
        let file_name = format!("{}_{}.jsonl", dataset_name.replace('/', "_"), split);
        self.config.output_dir.join(file_name)
    }
}
