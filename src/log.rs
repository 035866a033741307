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

//! # Melx Logging Module
//!
//! Small stdout handler for the `log` facade. Library code logs only
//! through the facade macros; the binaries install this handler once at
//! startup. All diagnostics go to standard output as plain text.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Stdout handler emitting one plain-text line per log record.
pub struct MelStdoutLogger {
    level: LevelFilter,
}

impl MelStdoutLogger {
    /// Creates a handler filtering below the given level.
    pub fn new(level: LevelFilter) -> Self {
        MelStdoutLogger { level }
    }

    fn tag(level: Level) -> &'static str {
        match level {
            Level::Error => "ERROR",
            Level::Warn => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl Log for MelStdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("[{}] {}", Self::tag(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the stdout handler as the global logger.
///
/// Repeated calls are harmless; only the first installation wins.
pub fn init(level: LevelFilter) {
    let logger = Box::new(MelStdoutLogger::new(level));
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
