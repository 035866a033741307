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

//! # Synthetic Corpus Module
//!
//! Generates placeholder text corpora from hard-coded templates. Each
//! template is a static prose body repeated a fixed number of times and
//! written to a plain-text file, giving downstream ingestion something to
//! chew on when no real dataset is available.

mod templates;

pub mod generator;

pub use generator::{builtin_corpora, fallback_corpus, MelCorpusTemplate, MelSynthesizer};
