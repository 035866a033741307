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

//! # Melx Record Module
//!
//! This module provides the core data structure for representing individual
//! dataset records. A MelRecord is one unit of input data: a mapping from
//! field name to value, mirroring one row of a hub dataset.
//!
//! Records use JSON (serde_json::Value) for field values, enabling storage of
//! structured and semi-structured data without strict schemas. Records are
//! read-only once constructed; Melx never mutates data it pulls from the hub.
//!
//! ## Usage Example
//!
//! ```rust
//! use melx::record::MelRecord;
//! use serde_json::json;
//!
//! let record = MelRecord::from_value(json!({"text": "hello world"})).unwrap();
//! assert_eq!(record.text("text"), Some("hello world"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{MelError, Result};

/// One unit of input data: a field-name to value mapping.
///
/// Every dataset row that flows through Melx is represented as a MelRecord.
/// Field values use serde_json::Value to support any JSON-serializable shape,
/// although the exporter only ever reads string-valued fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MelRecord {
    /// Field name to value mapping, in the source's insertion order.
    pub fields: Map<String, Value>,
}

impl MelRecord {
    /// Constructs a record from an already-built field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        MelRecord { fields }
    }

    /// Constructs a record from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(MelRecord { fields }),
            other => Err(MelError::schema(format!(
                "record must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Returns the raw value of a field, if present.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns a field's value as a string slice, if the field exists and
    /// holds a string. Non-string values yield None.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Iterates the record's field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// Returns true when the record carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Convenience alias for working on batches of records.
pub type MelRecordBatch = Vec<MelRecord>;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
