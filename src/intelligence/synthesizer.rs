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

use crate::config::SynthesisConfig;
use crate::intelligence::keywords::Query;
use crate::intelligence::types::{Insight, InsightKind, RankedSection, SubsectionExcerpt};

/// Number of leading ranked sections that produce insights
pub const INSIGHT_SECTIONS: usize = 5;

const CONTENT_FALLBACK: &str = "Important information relevant to your role.";

/// Derives excerpts and insight records from ranked sections
pub struct InsightSynthesizer {
    config: SynthesisConfig,
}

impl InsightSynthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Pull up to `sentences_per_section` sentences out of each of the first
    /// `excerpt_sections` ranked sections. Sections without content yield nothing.
    pub fn excerpt(&self, ranked: &[RankedSection], query: &Query) -> Vec<SubsectionExcerpt> {
        let mut excerpts = Vec::new();

        for entry in ranked.iter().take(self.config.excerpt_sections) {
            let Some(content) = entry.section.non_empty_content() else {
                continue;
            };

            for sentence in self.split_sentences(content) {
                excerpts.push(SubsectionExcerpt {
                    section_title: entry.section.text.clone(),
                    refined_text: sentence.to_string(),
                    page_number: entry.section.page,
                    relevance_score: sentence_relevance(sentence, query),
                });
            }
        }

        excerpts
    }

    /// One insight per leading ranked section, most important first
    pub fn synthesize_insights(&self, ranked: &[RankedSection]) -> Vec<Insight> {
        ranked
            .iter()
            .take(INSIGHT_SECTIONS)
            .enumerate()
            .map(|(index, entry)| {
                let preview = match entry.section.non_empty_content() {
                    Some(content) => truncate_chars(content, self.config.insight_preview_chars),
                    None => CONTENT_FALLBACK.to_string(),
                };

                Insight {
                    page: entry.section.page,
                    text: format!("Key insight from {}: {}", entry.section.text, preview),
                    importance: (INSIGHT_SECTIONS - index) as u32,
                    kind: InsightKind::for_rank_index(index),
                }
            })
            .collect()
    }

    /// Split on runs of sentence terminators and keep the first qualifying,
    /// trimmed sentences
    fn split_sentences<'a>(&self, content: &'a str) -> Vec<&'a str> {
        content
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| s.chars().count() > self.config.min_sentence_chars)
            .take(self.config.sentences_per_section)
            .collect()
    }
}

/// Map the sentence's query hit count `h` onto [0.5, 1.0) as 0.5 + 0.5 * h / (h + 1)
pub fn sentence_relevance(sentence: &str, query: &Query) -> f64 {
    let hits = query.hit_count(&sentence.to_lowercase()) as f64;
    0.5 + 0.5 * hits / (hits + 1.0)
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::keywords::extract_keywords;
    use crate::intelligence::types::Section;

    fn ranked(sections: Vec<Section>) -> Vec<RankedSection> {
        sections
            .into_iter()
            .enumerate()
            .map(|(i, section)| RankedSection {
                section,
                importance_rank: i + 1,
                relevance_score: 0.0,
            })
            .collect()
    }

    fn synthesizer() -> InsightSynthesizer {
        InsightSynthesizer::new(SynthesisConfig::default())
    }

    #[test]
    fn test_excerpt_takes_first_three_long_sentences() {
        let sections = ranked(vec![Section::new("H1", "Overview", 3).with_content(
            "Short one. This sentence is long enough!! Another qualifying sentence? \
             Yet another long sentence. The fourth long sentence is dropped.",
        )]);
        let excerpts = synthesizer().excerpt(&sections, &Query::default());

        let texts: Vec<&str> = excerpts.iter().map(|e| e.refined_text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "This sentence is long enough",
                "Another qualifying sentence",
                "Yet another long sentence"
            ]
        );
        assert!(excerpts.iter().all(|e| e.section_title == "Overview"));
        assert!(excerpts.iter().all(|e| e.page_number == 3));
    }

    #[test]
    fn test_sentence_of_exactly_ten_chars_dropped() {
        let sections = ranked(vec![
            Section::new("H2", "A", 1).with_content("abcdefghij. abcdefghijk.")
        ]);
        let excerpts = synthesizer().excerpt(&sections, &Query::default());

        assert_eq!(excerpts.len(), 1);
        assert_eq!(excerpts[0].refined_text, "abcdefghijk");
    }

    #[test]
    fn test_sections_without_content_yield_nothing() {
        let sections = ranked(vec![
            Section::new("H1", "No content", 1),
            Section::new("H1", "Empty content", 2).with_content(""),
            Section::new("H1", "Only short bits", 3).with_content("Hi. Ok! Yes?"),
        ]);

        assert!(synthesizer().excerpt(&sections, &Query::default()).is_empty());
    }

    #[test]
    fn test_excerpt_considers_only_first_five_sections() {
        let sections = ranked(
            (1..=8)
                .map(|i| {
                    Section::new("H2", &format!("Section {}", i), i)
                        .with_content("A reasonably long sentence. Second long sentence here.")
                })
                .collect(),
        );
        let excerpts = synthesizer().excerpt(&sections, &Query::default());

        assert_eq!(excerpts.len(), 10);
        assert!(excerpts.iter().all(|e| e.page_number <= 5));
    }

    #[test]
    fn test_excerpt_bounded_by_fifteen() {
        let body = "Sentence number one here. Sentence number two here. \
                    Sentence number three here. Sentence number four here.";
        let sections = ranked(
            (1..=10)
                .map(|i| Section::new("H2", "Body", i).with_content(body))
                .collect(),
        );

        assert_eq!(
            synthesizer().excerpt(&sections, &Query::default()).len(),
            15
        );
    }

    #[test]
    fn test_excerpt_text_is_substring_of_content() {
        let content = "  Museums open at nine!   Tickets are sold online only...  \
                       Guided tours run hourly?";
        let sections = ranked(vec![Section::new("H2", "Visiting", 4).with_content(content)]);
        let excerpts = synthesizer().excerpt(&sections, &Query::default());

        assert_eq!(excerpts.len(), 3);
        for excerpt in &excerpts {
            assert!(content.contains(&excerpt.refined_text));
            assert_eq!(excerpt.refined_text, excerpt.refined_text.trim());
        }
    }

    #[test]
    fn test_excerpt_relevance_score_range_and_determinism() {
        let query = extract_keywords("museum", "tours");
        let sections = ranked(vec![Section::new("H2", "Visiting", 4).with_content(
            "Museum tours are great for museum lovers. Nothing relevant is said here.",
        )]);
        let first = synthesizer().excerpt(&sections, &query);
        let second = synthesizer().excerpt(&sections, &query);

        assert_eq!(first, second);
        // museum x2 + tours x1 => 3 hits => 0.5 + 0.5 * 3/4
        assert!((first[0].relevance_score - 0.875).abs() < 1e-9);
        assert_eq!(first[1].relevance_score, 0.5);
        assert!(first.iter().all(|e| (0.5..1.0).contains(&e.relevance_score)));
    }

    #[test]
    fn test_insights_importance_and_kinds() {
        let sections = ranked(
            (1..=7)
                .map(|i| Section::new("H2", &format!("S{}", i), i * 2))
                .collect(),
        );
        let insights = synthesizer().synthesize_insights(&sections);

        assert_eq!(insights.len(), 5);
        let importance: Vec<u32> = insights.iter().map(|i| i.importance).collect();
        assert_eq!(importance, vec![5, 4, 3, 2, 1]);
        let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::KeyFinding,
                InsightKind::KeyFinding,
                InsightKind::RelevantSection,
                InsightKind::RelevantSection,
                InsightKind::ActionItem
            ]
        );
        assert_eq!(insights[2].page, 6);
    }

    #[test]
    fn test_insight_text_template() {
        let long_content = "x".repeat(150);
        let sections = ranked(vec![
            Section::new("H1", "Findings", 1).with_content(&long_content),
            Section::new("H1", "Appendix", 2),
            Section::new("H1", "Notes", 3).with_content(""),
        ]);
        let insights = synthesizer().synthesize_insights(&sections);

        assert_eq!(
            insights[0].text,
            format!("Key insight from Findings: {}", "x".repeat(100))
        );
        assert_eq!(
            insights[1].text,
            "Key insight from Appendix: Important information relevant to your role."
        );
        assert_eq!(
            insights[2].text,
            "Key insight from Notes: Important information relevant to your role."
        );
    }

    #[test]
    fn test_fewer_than_five_sections() {
        let sections = ranked(vec![Section::new("H1", "Only", 1)]);
        let insights = synthesizer().synthesize_insights(&sections);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].importance, 5);
        assert_eq!(insights[0].kind, InsightKind::KeyFinding);
    }

    #[test]
    fn test_empty_input() {
        assert!(synthesizer().excerpt(&[], &Query::default()).is_empty());
        assert!(synthesizer().synthesize_insights(&[]).is_empty());
    }

    #[test]
    fn test_insight_kind_serialization() {
        let json = serde_json::to_string(&InsightKind::RelevantSection).unwrap();
        assert_eq!(json, "\"relevant_section\"");
        assert_eq!(InsightKind::ActionItem.to_string(), "action_item");
    }
}
