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

use std::fs;
use std::path::PathBuf;

use crate::errors::Result;
use crate::synth::templates;

/// A synthetic corpus: one hard-coded text body written out a fixed number
/// of times to a plain-text file.
#[derive(Clone, Debug)]
pub struct MelCorpusTemplate {
    /// Human-readable corpus name used in diagnostics.
    pub name: &'static str,
    /// File name of the generated corpus, relative to the output directory.
    pub file_name: &'static str,
    /// The text body.
    pub body: &'static str,
    /// How many times the body is repeated for more data.
    pub repeats: usize,
}

impl MelCorpusTemplate {
    /// Renders the full corpus content.
    pub fn render(&self) -> String {
        self.body.repeat(self.repeats)
    }
}

/// The built-in synthetic corpora.
pub fn builtin_corpora() -> Vec<MelCorpusTemplate> {
    vec![
        MelCorpusTemplate {
            name: "system overview",
            file_name: "melvin_documentation.txt",
            body: templates::SYSTEM_OVERVIEW,
            repeats: 5,
        },
        MelCorpusTemplate {
            name: "encyclopedia concepts",
            file_name: "wikipedia_concepts.txt",
            body: templates::ENCYCLOPEDIA_CONCEPTS,
            repeats: 3,
        },
        MelCorpusTemplate {
            name: "literary prose",
            file_name: "literature.txt",
            body: templates::LITERARY_PROSE,
            repeats: 2,
        },
        MelCorpusTemplate {
            name: "technical notes",
            file_name: "technical_docs.txt",
            body: templates::TECHNICAL_NOTES,
            repeats: 2,
        },
    ]
}

/// Small seed corpus used as a last resort when no hub dataset exported.
pub fn fallback_corpus() -> MelCorpusTemplate {
    MelCorpusTemplate {
        name: "fallback seed",
        file_name: "simple_test.txt",
        body: templates::FALLBACK_SEED,
        repeats: 1,
    }
}

/// Writes synthetic corpora as UTF-8 plain-text files.
///
/// Files are truncated on every write; the synthesizer fully owns its
/// outputs and no append semantics exist.
pub struct MelSynthesizer {
    output_dir: PathBuf,
}

impl MelSynthesizer {
    /// Creates a synthesizer writing under the given directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes one corpus, creating the output directory as needed.
    pub fn write(&self, template: &MelCorpusTemplate) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(template.file_name);
        let content = template.render();
        fs::write(&path, &content)?;

        log::info!(
            "Created {} ({} characters)",
            path.display(),
            content.len()
        );
        Ok(path)
    }

    /// Writes every built-in corpus, returning the paths in order.
    pub fn write_all(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for template in builtin_corpora() {
            paths.push(self.write(&template)?);
        }
        Ok(paths)
    }
}
