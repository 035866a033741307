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

//! # Melx Core Tests - Record
//!
//! Tests for MelRecord, the field-name to value mapping representing one
//! dataset row.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test record
//! ```

use melx::record::MelRecord;
use serde_json::json;

/// Tests record construction from a JSON object.
#[test]
fn test_record_from_object() {
    let record = MelRecord::from_value(json!({"text": "hello", "label": 1})).unwrap();

    assert_eq!(record.field("text"), Some(&json!("hello")));
    assert_eq!(record.field("label"), Some(&json!(1)));
    assert!(record.field("missing").is_none());
}

/// Tests that non-object values are rejected with a schema error.
#[test]
fn test_record_from_non_object_fails() {
    let err = MelRecord::from_value(json!([1, 2, 3])).unwrap_err();
    assert!(err.to_string().contains("schema"));
}

/// Tests the string view of a field: strings come back as slices,
/// non-string values yield None.
#[test]
fn test_record_text_accessor() {
    let record = MelRecord::from_value(json!({"text": "hi", "count": 3})).unwrap();

    assert_eq!(record.text("text"), Some("hi"));
    assert!(record.text("count").is_none());
    assert!(record.text("missing").is_none());
}

/// Tests that field names iterate in insertion order.
#[test]
fn test_record_field_names_preserve_order() {
    let record =
        MelRecord::from_value(json!({"zeta": "z", "alpha": "a", "mid": "m"})).unwrap();

    let names: Vec<&String> = record.field_names().collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

/// Tests transparent serde round-trip of a record.
#[test]
fn test_record_serde_round_trip() {
    let record = MelRecord::from_value(json!({"text": "roundtrip"})).unwrap();

    let encoded = serde_json::to_string(&record).unwrap();
    assert_eq!(encoded, r#"{"text":"roundtrip"}"#);

    let decoded: MelRecord = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.text("text"), Some("roundtrip"));
}
