//! Copyright © 2025-2026 The Melx Authors. All Rights Reserved.
//!
//! This file is part of Melx.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Melx Export Tests - Exporter
//!
//! End-to-end tests of the dataset-to-JSONL export routine, driven through
//! an in-memory hub provider and temporary output directories.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test exporter
//! ```

use std::fs;
use std::path::PathBuf;

use melx::errors::{MelError, Result};
use melx::export::{MelExportConfig, MelExporter};
use melx::hub::{MelDataset, MelHubProvider};
use melx::record::MelRecord;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Hub provider serving a fixed record set from memory.
struct FixtureProvider {
    columns: Vec<String>,
    rows: Vec<Value>,
}

impl FixtureProvider {
    fn new(columns: &[&str], rows: Vec<Value>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

impl MelHubProvider for FixtureProvider {
    fn load(&self, name: &str, split: &str) -> Result<MelDataset> {
        let records = self
            .rows
            .iter()
            .cloned()
            .map(MelRecord::from_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(MelDataset::new(name, split, self.columns.clone(), records))
    }
}

/// Hub provider that always fails, simulating an unavailable dataset.
struct UnavailableProvider;

impl MelHubProvider for UnavailableProvider {
    fn load(&self, name: &str, _split: &str) -> Result<MelDataset> {
        Err(MelError::hub(name, "dataset not found"))
    }
}

fn exporter_in<P: MelHubProvider>(dir: &TempDir, provider: P, max: usize) -> MelExporter<P> {
    MelExporter::new(provider).with_config(MelExportConfig {
        output_dir: dir.path().to_path_buf(),
        max_examples: max,
        progress_interval: 1000,
    })
}

fn read_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// Tests the baseline scenario: whitespace-only records are filtered and
/// the surviving lines keep source order.
#[test]
fn test_export_filters_whitespace_records() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(
        &["text"],
        vec![json!({"text": "a"}), json!({"text": "  "}), json!({"text": "b"})],
    );
    let exporter = exporter_in(&dir, provider, 10);

    let path = exporter.export("demo", "train").unwrap().unwrap();
    let lines = read_lines(&path);

    assert_eq!(lines, vec![r#"{"text":"a"}"#, r#"{"text":"b"}"#]);
}

/// Tests that each output line parses to an object with exactly one `text`
/// key holding the verbatim source value, untrimmed.
#[test]
fn test_export_lines_preserve_value_verbatim() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(&["text"], vec![json!({"text": "  padded value  "})]);
    let exporter = exporter_in(&dir, provider, 10);

    let path = exporter.export("demo", "train").unwrap().unwrap();
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);

    let parsed: Value = serde_json::from_str(&lines[0]).unwrap();
    let obj = parsed.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj.get("text"), Some(&json!("  padded value  ")));
}

/// Tests that the output line count never exceeds max_examples and stops at
/// the first eligible records in source order.
#[test]
fn test_export_respects_max_examples() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(
        &["text"],
        vec![json!({"text": "one"}), json!({"text": "two"}), json!({"text": "three"})],
    );
    let exporter = exporter_in(&dir, provider, 1);

    let path = exporter.export("demo", "train").unwrap().unwrap();
    let lines = read_lines(&path);

    assert_eq!(lines, vec![r#"{"text":"one"}"#]);
}

/// Tests that ineligible records do not count against the cap.
#[test]
fn test_export_cap_counts_accepted_records_only() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(
        &["text"],
        vec![
            json!({"text": ""}),
            json!({"text": "kept one"}),
            json!({"text": "   "}),
            json!({"text": "kept two"}),
            json!({"text": "dropped by cap"}),
        ],
    );
    let exporter = exporter_in(&dir, provider, 2);

    let path = exporter.export("demo", "train").unwrap().unwrap();
    let lines = read_lines(&path);

    assert_eq!(lines, vec![r#"{"text":"kept one"}"#, r#"{"text":"kept two"}"#]);
}

/// Tests that a record with a null or non-string value for the selected
/// field is filtered per record rather than failing the export.
#[test]
fn test_export_skips_null_values_for_selected_field() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(
        &["text"],
        vec![json!({"text": "first"}), json!({"text": null}), json!({"text": "last"})],
    );
    let exporter = exporter_in(&dir, provider, 10);

    let path = exporter.export("demo", "train").unwrap().unwrap();
    let lines = read_lines(&path);

    assert_eq!(lines, vec![r#"{"text":"first"}"#, r#"{"text":"last"}"#]);
}

/// Tests that a dataset with no eligible text field is skipped without
/// creating any file.
#[test]
fn test_export_without_text_field_returns_none() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(&["id", "score"], vec![json!({"id": 1, "score": 0.5})]);
    let exporter = exporter_in(&dir, provider, 10);

    let result = exporter.export("demo", "train").unwrap();

    assert!(result.is_none());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Tests that an unavailable dataset is the recovered failure path: logged,
/// null result, no file.
#[test]
fn test_export_unavailable_dataset_returns_none() {
    let dir = TempDir::new().unwrap();
    let exporter = exporter_in(&dir, UnavailableProvider, 10);

    let result = exporter.export("missing/dataset", "train").unwrap();

    assert!(result.is_none());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Tests the output file naming: slashes become underscores and the split
/// is suffixed.
#[test]
fn test_export_file_name_derivation() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(&["text"], vec![json!({"text": "x"})]);
    let exporter = exporter_in(&dir, provider, 10);

    let path = exporter.export("org/dataset", "validation").unwrap().unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "org_dataset_validation.jsonl"
    );
}

/// Tests that a re-run truncates the previous output instead of appending.
#[test]
fn test_export_truncates_on_rerun() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(
        &["text"],
        vec![json!({"text": "alpha"}), json!({"text": "beta"})],
    );
    let exporter = exporter_in(&dir, provider, 10);

    let first = exporter.export("demo", "train").unwrap().unwrap();
    let second = exporter.export("demo", "train").unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(read_lines(&second).len(), 2);
}

/// Tests that the fallback-selected column exports like any candidate.
#[test]
fn test_export_with_fallback_column() {
    let dir = TempDir::new().unwrap();
    let provider = FixtureProvider::new(
        &["headline"],
        vec![json!({"headline": "a headline long enough"}), json!({"headline": "next"})],
    );
    let exporter = exporter_in(&dir, provider, 10);

    let path = exporter.export("news", "train").unwrap().unwrap();
    let lines = read_lines(&path);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], r#"{"text":"next"}"#);
}
