// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashSet;

/// Tokens of this many characters or fewer are dropped as noise
const MAX_NOISE_TOKEN_CHARS: usize = 3;

/// Deduplicated lowercase query terms derived from a persona and a job.
/// Terms keep first-seen order so output listing them is reproducible;
/// scoring only depends on membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum over all terms of their non-overlapping literal occurrences in `text`.
    /// `text` must already be lowercased.
    pub fn hit_count(&self, text: &str) -> usize {
        self.terms
            .iter()
            .map(|term| text.matches(term.as_str()).count())
            .sum()
    }
}

/// Extract query terms from a persona and a job-to-be-done
pub fn extract_keywords(persona: &str, job: &str) -> Query {
    let text = format!("{} {}", persona, job).to_lowercase();

    let mut seen = HashSet::new();
    let terms = text
        .split_whitespace()
        .filter(|token| token.chars().count() > MAX_NOISE_TOKEN_CHARS)
        .filter(|token| seen.insert(*token))
        .map(|token| token.to_string())
        .collect();

    Query { terms }
}
