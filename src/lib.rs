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

//! # Melx Core Library
//!
//! Melx produces text input fixtures for the Melvin cognitive architecture.
//! It either synthesizes placeholder corpora from built-in templates or
//! exports public datasets from a remote hub as JSON-lines files.
//!
//! ## Module Overview
//!
//! - **record**: MelRecord, the field-name to value mapping for one dataset row
//! - **hub**: the external dataset collaborator (dataset handle, HTTP client)
//! - **export**: the corpus exporter (text-field selection, JSONL writing)
//! - **synth**: built-in synthetic corpus generators
//! - **log**: stdout handler for the `log` facade
//! - **errors**: MelError and the crate Result alias
//!
//! ## Quick Start
//!
//! ```no_run
//! use melx::export::MelExporter;
//! use melx::hub::MelHubClient;
//!
//! let exporter = MelExporter::new(MelHubClient::new());
//! let path = exporter.export("wikitext", "train")?;
//! # Ok::<(), melx::MelError>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, MelError>`. An export call recovers only
//! from an unavailable dataset (logged, yields `Ok(None)`); filesystem
//! failures propagate to the caller.

pub mod errors;
pub mod export;
pub mod hub;
pub mod log;
pub mod record;
pub mod synth;

pub use errors::{MelError, Result};
pub use export::{detect_text_field, MelExportConfig, MelExporter, CANDIDATE_FIELDS};
pub use hub::{MelDataset, MelHubClient, MelHubConfig, MelHubProvider};
pub use record::{MelRecord, MelRecordBatch};
pub use synth::{builtin_corpora, fallback_corpus, MelCorpusTemplate, MelSynthesizer};
