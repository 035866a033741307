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

use crate::hub::dataset::MelDataset;

/// Candidate text field names, scanned in priority order.
pub const CANDIDATE_FIELDS: [&str; 6] =
    ["text", "sentence", "content", "document", "inputs", "input"];

/// Length, in characters, a first-record string value must exceed for a
/// non-candidate column to qualify as the fallback text field.
const FALLBACK_MIN_LEN: usize = 10;

/// Picks the field holding free text, once per dataset.
///
/// Priority candidates win in list order when the column is declared and the
/// first record holds a string there. Failing that, the first declared
/// column whose first-record value is a string longer than ten characters is
/// used. Returns None when nothing qualifies; callers skip the dataset.
///
/// The fallback inspects only the first record, so it is best-effort: a
/// later null or non-string value for the chosen column is filtered out per
/// record during export, never re-selected.
pub fn detect_text_field(dataset: &MelDataset) -> Option<String> {
    let first = dataset.first()?;

    for candidate in CANDIDATE_FIELDS {
        if dataset.column_names().iter().any(|c| c == candidate)
            && first.text(candidate).is_some()
        {
            return Some(candidate.to_string());
        }
    }

    for column in dataset.column_names() {
        if let Some(value) = first.text(column) {
            // Length is counted in characters, not bytes.
            if value.chars().count() > FALLBACK_MIN_LEN {
                return Some(column.clone());
            }
        }
    }

    None
}
