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

//! # Hub Client Module
//!
//! HTTP implementation of [`MelHubProvider`] against the public dataset
//! server API. Retrieval is blocking and synchronous: each `load` call
//! resolves the dataset's config via `/splits`, then pages `/rows` until the
//! row cap is reached or the split is exhausted.
//!
//! The paging here is transport mechanics only; callers see one fully
//! materialized, ordered dataset handle per load.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{MelError, Result};
use crate::hub::dataset::MelDataset;
use crate::hub::MelHubProvider;
use crate::record::{MelRecord, MelRecordBatch};

/// Configuration for the HTTP hub client.
#[derive(Clone, Debug)]
pub struct MelHubConfig {
    /// Base URL of the dataset server.
    pub base_url: String,
    /// Rows requested per page. The server caps pages at 100 rows.
    pub page_size: usize,
    /// Upper bound on rows pulled per dataset load.
    pub max_rows: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for MelHubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://datasets-server.huggingface.co".to_string(),
            page_size: 100,
            max_rows: 10_000,
            timeout_secs: 30,
        }
    }
}

/// Blocking HTTP client for the dataset hub.
pub struct MelHubClient {
    config: MelHubConfig,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct SplitsResponse {
    #[serde(default)]
    splits: Vec<SplitEntry>,
}

#[derive(Debug, Deserialize)]
struct SplitEntry {
    #[serde(default)]
    config: String,
    #[serde(default)]
    split: String,
}

#[derive(Debug, Deserialize)]
struct RowsResponse {
    #[serde(default)]
    features: Vec<FeatureEntry>,
    #[serde(default)]
    rows: Vec<RowEntry>,
    #[serde(default)]
    num_rows_total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FeatureEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RowEntry {
    row: Value,
}

impl MelHubClient {
    /// Creates a client with default configuration.
    pub fn new() -> Self {
        Self::with_config(MelHubConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: MelHubConfig) -> Self {
        Self {
            config,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Resolves the config name serving the requested split.
    fn resolve_config(&self, name: &str, split: &str) -> Result<String> {
        let url = format!("{}/splits", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("dataset", name)])
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()?;

        if !response.status().is_success() {
            return Err(MelError::hub(
                name,
                format!("splits lookup returned status {}", response.status()),
            ));
        }

        let splits: SplitsResponse = response
            .json()
            .map_err(|e| MelError::schema(format!("malformed splits response: {}", e)))?;

        splits
            .splits
            .into_iter()
            .find(|entry| entry.split == split)
            .map(|entry| entry.config)
            .ok_or_else(|| MelError::hub(name, format!("no such split '{}'", split)))
    }

    /// Pages the rows endpoint, collecting records in source order.
    fn fetch_rows(
        &self,
        name: &str,
        config_name: &str,
        split: &str,
    ) -> Result<(Vec<String>, MelRecordBatch)> {
        let url = format!("{}/rows", self.config.base_url);
        let mut column_names: Vec<String> = Vec::new();
        let mut records: MelRecordBatch = Vec::new();
        let mut offset = 0usize;

        loop {
            let remaining = self.config.max_rows.saturating_sub(records.len());
            if remaining == 0 {
                break;
            }
            let length = remaining.min(self.config.page_size);
            let offset_param = offset.to_string();
            let length_param = length.to_string();

            let response = self
                .http
                .get(&url)
                .query(&[
                    ("dataset", name),
                    ("config", config_name),
                    ("split", split),
                    ("offset", offset_param.as_str()),
                    ("length", length_param.as_str()),
                ])
                .timeout(Duration::from_secs(self.config.timeout_secs))
                .send()?;

            if !response.status().is_success() {
                return Err(MelError::hub(
                    name,
                    format!("rows request at offset {} returned status {}", offset, response.status()),
                ));
            }

            let page: RowsResponse = response
                .json()
                .map_err(|e| MelError::schema(format!("malformed rows response: {}", e)))?;

            if column_names.is_empty() {
                column_names = page.features.into_iter().map(|f| f.name).collect();
            }

            // A misbehaving server may return more rows than requested;
            // never let a page push the batch past the requested length.
            let page_len = page.rows.len();
            for entry in page.rows.into_iter().take(length) {
                records.push(MelRecord::from_value(entry.row)?);
            }
            offset += page_len;

            let exhausted = match page.num_rows_total {
                Some(total) => offset as u64 >= total,
                None => page_len < length,
            };
            if page_len == 0 || exhausted {
                break;
            }
        }

        Ok((column_names, records))
    }
}

impl Default for MelHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MelHubProvider for MelHubClient {
    fn load(&self, name: &str, split: &str) -> Result<MelDataset> {
        let config_name = self.resolve_config(name, split)?;
        log::debug!(
            "Resolved dataset '{}' split '{}' to config '{}'",
            name,
            split,
            config_name
        );

        let (column_names, records) = self.fetch_rows(name, &config_name, split)?;
        log::debug!("Fetched {} rows for dataset '{}'", records.len(), name);

        Ok(MelDataset::new(name, split, column_names, records))
    }
}
