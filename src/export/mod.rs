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

//! # Corpus Export Module
//!
//! This module turns hub datasets into JSON-lines corpus files.
//!
//! ## Module Components
//!
//! - **Field** (field.rs): heuristic selection of the free-text field
//! - **Exporter** (exporter.rs): the dataset-to-JSONL export routine
//!
//! ## Output Format
//!
//! One JSON object per line of shape `{"text": <string>}`, UTF-8, suitable
//! for line-oriented downstream ingestion. Files are named
//! `<dataset name with '/' replaced by '_'>_<split>.jsonl` and are truncated
//! on every run; the exporter is the only writer of a given file.

pub mod exporter;
pub mod field;

pub use exporter::{MelExportConfig, MelExporter};
pub use field::{detect_text_field, CANDIDATE_FIELDS};
