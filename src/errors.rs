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

//! # Melx Error Module
//!
//! This module defines the error types used throughout Melx for consistent
//! error handling and reporting.
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors; these are always fatal to an export run
//! - **Hub**: Retrieval failures from the remote dataset hub (not found,
//!   network/auth errors, malformed remote responses)
//! - **Http**: Transport-level failures from the HTTP client
//! - **Schema**: Hub responses whose layout does not match expectations
//! - **Validation**: Invalid parameters
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures

use std::io;

use thiserror::Error;

/// Convenience result type used throughout Melx.
pub type Result<T> = std::result::Result<T, MelError>;

/// Canonical error enumeration for Melx.
#[derive(Debug, Error)]
pub enum MelError {
    /// Errors originating from the filesystem.
    #[error("io error: {0}")]
    Io(String),

    /// Retrieval failures reported by the dataset hub.
    #[error("hub error for dataset '{dataset}': {message}")]
    Hub { dataset: String, message: String },

    /// Transport-level HTTP failures.
    #[error("http error: {0}")]
    Http(String),

    /// Errors caused by malformed or unexpected remote response layout.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for MelError {
    fn from(err: io::Error) -> Self {
        MelError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MelError {
    fn from(err: serde_json::Error) -> Self {
        MelError::Serde(err.to_string())
    }
}

impl From<reqwest::Error> for MelError {
    fn from(err: reqwest::Error) -> Self {
        MelError::Http(err.to_string())
    }
}

impl MelError {
    /// Helper to construct hub errors.
    pub fn hub(dataset: impl Into<String>, message: impl Into<String>) -> Self {
        MelError::Hub {
            dataset: dataset.into(),
            message: message.into(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        MelError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        MelError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        MelError::Internal(message.into())
    }
}
