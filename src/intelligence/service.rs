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

use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::{Config, DefaultsConfig};
use crate::intelligence::extractor::OutlineExtractor;
use crate::intelligence::keywords::extract_keywords;
use crate::intelligence::metadata::{estimate_metadata, title_from_file_name};
use crate::intelligence::ranker::SectionRanker;
use crate::intelligence::synthesizer::InsightSynthesizer;
use crate::intelligence::types::{
    AnalysisMetadata, DocumentIntelligenceResult, ExtractedSection, ProcessedDocument,
    RankedSection, Section,
};

/// Runs the keyword, ranking and synthesis stages per document.
/// Holds no mutable state; one instance can serve any number of batches.
pub struct DocumentIntelligenceService {
    defaults: DefaultsConfig,
    top_sections: usize,
    ranker: SectionRanker,
    synthesizer: InsightSynthesizer,
    extractor: Arc<dyn OutlineExtractor>,
}

impl DocumentIntelligenceService {
    pub fn new(config: &Config, extractor: Arc<dyn OutlineExtractor>) -> Self {
        Self {
            defaults: config.defaults.clone(),
            top_sections: config.synthesis.top_sections,
            ranker: SectionRanker::new(config.ranking.clone()),
            synthesizer: InsightSynthesizer::new(config.synthesis.clone()),
            extractor,
        }
    }

    /// Full ranked outline, defaults applied
    pub fn rank(&self, outline: &[Section], persona: &str, job: &str) -> Vec<RankedSection> {
        let (persona, job) = self.defaults.resolve(persona, job);
        self.ranker.rank(outline, &persona, &job)
    }

    /// Extract the outline at `path` and rank all of its sections
    pub async fn rank_document(
        &self,
        path: &Path,
        persona: &str,
        job: &str,
    ) -> Result<Vec<RankedSection>> {
        let extracted = self.extractor.extract(path).await?;
        Ok(self.rank(&extracted.sections, persona, job))
    }

    /// Analyze one already extracted outline
    pub fn analyze(
        &self,
        document_name: &str,
        outline: &[Section],
        persona: &str,
        job: &str,
    ) -> DocumentIntelligenceResult {
        let (persona, job) = self.defaults.resolve(persona, job);
        let query = extract_keywords(&persona, &job);

        let mut ranked = self.ranker.rank_with_query(outline, &query);
        ranked.truncate(self.top_sections);

        let subsection_analysis = self.synthesizer.excerpt(&ranked, &query);
        let insights = self.synthesizer.synthesize_insights(&ranked);

        let extracted_sections = ranked
            .iter()
            .map(|entry| ExtractedSection {
                document: document_name.to_string(),
                section_title: entry.section.text.clone(),
                importance_rank: entry.importance_rank,
                page_number: entry.section.page,
            })
            .collect();

        DocumentIntelligenceResult {
            metadata: AnalysisMetadata {
                input_documents: vec![document_name.to_string()],
                persona,
                job_to_be_done: job,
                processing_timestamp: Utc::now(),
            },
            extracted_sections,
            subsection_analysis,
            document_outline: outline.to_vec(),
            insights,
        }
    }

    /// Extract and analyze a single document
    pub async fn process_document(
        &self,
        path: &Path,
        persona: &str,
        job: &str,
    ) -> Result<ProcessedDocument> {
        let extracted = self.extractor.extract(path).await?;

        let intelligence = self.analyze(&extracted.file_name, &extracted.sections, persona, job);

        info!(
            document = %extracted.file_name,
            sections = extracted.sections.len(),
            excerpts = intelligence.subsection_analysis.len(),
            "Processed document"
        );

        Ok(ProcessedDocument {
            title: title_from_file_name(&extracted.file_name),
            source_path: path.to_path_buf(),
            metadata: estimate_metadata(extracted.file_size),
            outline: extracted.sections,
            intelligence,
        })
    }

    /// Process documents one after another.
    /// A document that fails is logged and left out; the rest keep input order.
    pub async fn process_documents(
        &self,
        paths: &[PathBuf],
        persona: &str,
        job: &str,
    ) -> Vec<ProcessedDocument> {
        let mut results = Vec::with_capacity(paths.len());

        for path in paths {
            match self.process_document(path, persona, job).await {
                Ok(document) => results.push(document),
                Err(e) => {
                    error!(path = %path.display(), "Error processing document: {:#}", e);
                }
            }
        }

        results
    }
}
