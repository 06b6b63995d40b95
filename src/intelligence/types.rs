use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One heading in a document outline, as supplied by the outline extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading depth label such as "H1" or "H2"
    pub level: String,
    /// Heading title
    pub text: String,
    /// 1-based page the heading starts on
    pub page: u32,
    /// Body text under the heading, if the extractor captured it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Section {
    pub fn new(level: &str, text: &str, page: u32) -> Self {
        Self {
            level: level.to_string(),
            text: text.to_string(),
            page,
            content: None,
        }
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Content if present and non-empty
    pub fn non_empty_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// A section copied out of the outline and annotated by the ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSection {
    #[serde(flatten)]
    pub section: Section,
    /// 1-based position of the section in the input outline, assigned before sorting.
    /// This is not the post-sort rank: the first ranked entry may carry any value.
    pub importance_rank: usize,
    /// Keyword hit count after boosts, never negative
    pub relevance_score: f64,
}

/// A sentence lifted verbatim from a top section's content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsectionExcerpt {
    /// Title of the section the sentence came from
    #[serde(rename = "document")]
    pub section_title: String,
    pub refined_text: String,
    pub page_number: u32,
    /// Lexical overlap with the query, in [0.5, 1.0)
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    KeyFinding,
    RelevantSection,
    ActionItem,
}

impl InsightKind {
    /// Kind for the insight generated from the ranked section at `index`
    pub fn for_rank_index(index: usize) -> Self {
        match index {
            0 | 1 => InsightKind::KeyFinding,
            2 | 3 => InsightKind::RelevantSection,
            _ => InsightKind::ActionItem,
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightKind::KeyFinding => write!(f, "key_finding"),
            InsightKind::RelevantSection => write!(f, "relevant_section"),
            InsightKind::ActionItem => write!(f, "action_item"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub page: u32,
    pub text: String,
    /// 5 for the best ranked section down to 1
    pub importance: u32,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

/// Top ranked section reduced to what a viewer needs to link to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSection {
    /// File name of the source document
    pub document: String,
    pub section_title: String,
    pub importance_rank: usize,
    pub page_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    pub processing_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentIntelligenceResult {
    pub metadata: AnalysisMetadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionExcerpt>,
    /// The outline exactly as it was supplied
    pub document_outline: Vec<Section>,
    pub insights: Vec<Insight>,
}

/// Size-based estimates about the source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub pages: u32,
    pub language: String,
    /// Minutes
    pub estimated_reading_time: u32,
    pub file_size: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub title: String,
    pub source_path: PathBuf,
    pub outline: Vec<Section>,
    pub metadata: DocumentMetadata,
    pub intelligence: DocumentIntelligenceResult,
}
