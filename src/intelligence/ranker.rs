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

//! Relevance ranking of outline sections against a persona query.
//!
//! The score of a section is its keyword hit count multiplied by
//! structural boosts:
//!
//! ```text
//! score = hits(title + " " + content) × h1 × summary × conclusion
//! ```
//!
//! Each boost is applied independently, so a "Summary and Conclusion" H1
//! heading receives all three. Sections are then stable-sorted by score,
//! highest first.

use std::cmp::Ordering;

use tracing::debug;

use crate::config::RankingConfig;
use crate::intelligence::keywords::{extract_keywords, Query};
use crate::intelligence::types::{RankedSection, Section};

pub struct SectionRanker {
    config: RankingConfig,
}

impl SectionRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Rank sections against the query derived from `persona` and `job`
    pub fn rank(&self, sections: &[Section], persona: &str, job: &str) -> Vec<RankedSection> {
        let query = extract_keywords(persona, job);
        self.rank_with_query(sections, &query)
    }

    /// Rank sections against an already extracted query.
    ///
    /// Returns one entry per input section. `importance_rank` is the 1-based
    /// input position, assigned before sorting. Equal scores keep input order.
    pub fn rank_with_query(&self, sections: &[Section], query: &Query) -> Vec<RankedSection> {
        let mut ranked: Vec<RankedSection> = sections
            .iter()
            .enumerate()
            .map(|(index, section)| RankedSection {
                section: section.clone(),
                importance_rank: index + 1,
                relevance_score: self.score(section, query),
            })
            .collect();

        // Vec::sort_by is stable
        ranked.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            sections = ranked.len(),
            terms = query.len(),
            top_score = ranked.first().map(|r| r.relevance_score).unwrap_or(0.0),
            "Ranked outline sections"
        );

        ranked
    }

    /// Score a single section
    pub fn score(&self, section: &Section, query: &Query) -> f64 {
        let scoring_text = format!(
            "{} {}",
            section.text,
            section.content.as_deref().unwrap_or("")
        )
        .to_lowercase();

        let mut score = query.hit_count(&scoring_text) as f64;

        let title = section.text.to_lowercase();
        if section.level == "H1" {
            score *= self.config.h1_boost;
        }
        if title.contains("summary") {
            score *= self.config.summary_boost;
        }
        if title.contains("conclusion") {
            score *= self.config.conclusion_boost;
        }

        score
    }
}
