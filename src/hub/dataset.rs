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

use crate::record::{MelRecord, MelRecordBatch};

/// Read-only dataset handle: an ordered record sequence plus the column
/// names the hub declared for it.
///
/// A MelDataset exists only for the duration of one export call. It is never
/// persisted or mutated; iteration is single pass in insertion order.
#[derive(Clone, Debug)]
pub struct MelDataset {
    name: String,
    split: String,
    column_names: Vec<String>,
    records: MelRecordBatch,
}

impl MelDataset {
    /// Constructs a dataset handle.
    ///
    /// When the hub did not declare column names, they are derived from the
    /// first record's field names.
    pub fn new(
        name: impl Into<String>,
        split: impl Into<String>,
        column_names: Vec<String>,
        records: MelRecordBatch,
    ) -> Self {
        let column_names = if column_names.is_empty() {
            records
                .first()
                .map(|r| r.field_names().cloned().collect())
                .unwrap_or_default()
        } else {
            column_names
        };

        MelDataset {
            name: name.into(),
            split: split.into(),
            column_names,
            records,
        }
    }

    /// The dataset name as the hub knows it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The split identifier this handle was loaded for.
    pub fn split(&self) -> &str {
        &self.split
    }

    /// Column names in hub-declared order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// The records in source order.
    pub fn records(&self) -> &[MelRecord] {
        &self.records
    }

    /// First record, if any. Field selection inspects only this record.
    pub fn first(&self) -> Option<&MelRecord> {
        self.records.first()
    }

    /// Number of records held by this handle.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the handle holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, MelRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a MelDataset {
    type Item = &'a MelRecord;
    type IntoIter = std::slice::Iter<'a, MelRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
