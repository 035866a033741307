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

//! # Dataset Hub Module
//!
//! This module models the external dataset collaborator: datasets are
//! addressed by a textual name and a split identifier, and resolve to an
//! ordered, read-only sequence of records.
//!
//! ## Module Components
//!
//! - **Dataset** (dataset.rs): MelDataset, the in-memory dataset handle
//! - **Client** (client.rs): MelHubClient, the HTTP hub provider
//!
//! Retrieval semantics (caching, network access, authentication) belong to
//! the hub and are entirely delegated to the provider implementation.

pub mod client;
pub mod dataset;

pub use client::{MelHubClient, MelHubConfig};
pub use dataset::MelDataset;

use crate::errors::Result;

/// Seam for the external dataset collaborator.
///
/// A provider resolves `(name, split)` into a dataset handle. Implementors
/// decide where the records actually come from; the exporter only relies on
/// getting an ordered record sequence with declared column names.
pub trait MelHubProvider {
    /// Retrieves a dataset by name and split identifier.
    fn load(&self, name: &str, split: &str) -> Result<MelDataset>;
}
