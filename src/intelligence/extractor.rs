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

//! Outline extraction boundary.
//!
//! Turning a PDF into an outline happens outside this crate. Extractors hand
//! over a pre-parsed outline; this is the only place the pipeline awaits I/O.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::intelligence::types::Section;

/// Outline of one document together with what is known about its file
#[derive(Debug, Clone)]
pub struct ExtractedOutline {
    pub file_name: String,
    pub file_size: u64,
    pub sections: Vec<Section>,
}

#[async_trait]
pub trait OutlineExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<ExtractedOutline>;
}

/// Accepted outline file layouts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OutlineFile {
    Described {
        #[serde(default)]
        document: Option<String>,
        #[serde(default)]
        file_size: Option<u64>,
        outline: Vec<Section>,
    },
    Bare(Vec<Section>),
}

/// Reads outlines produced by an external extractor from JSON files.
///
/// Either a bare array of sections, or
/// `{ "document": "guide.pdf", "file_size": 120000, "outline": [...] }`.
pub struct JsonOutlineExtractor;

#[async_trait]
impl OutlineExtractor for JsonOutlineExtractor {
    async fn extract(&self, path: &Path) -> Result<ExtractedOutline> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read outline {}", path.display()))?;
        let on_disk_size = tokio::fs::metadata(path)
            .await
            .map(|m| m.len())
            .unwrap_or(raw.len() as u64);

        let parsed: OutlineFile = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid outline JSON in {}", path.display()))?;

        let default_name = || {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        };

        let (file_name, file_size, sections) = match parsed {
            OutlineFile::Described {
                document,
                file_size,
                outline,
            } => (
                document.unwrap_or_else(default_name),
                file_size.unwrap_or(on_disk_size),
                outline,
            ),
            OutlineFile::Bare(outline) => (default_name(), on_disk_size, outline),
        };

        validate_sections(&sections)
            .with_context(|| format!("Rejected outline {}", path.display()))?;

        Ok(ExtractedOutline {
            file_name,
            file_size,
            sections,
        })
    }
}

fn validate_sections(sections: &[Section]) -> Result<()> {
    for (index, section) in sections.iter().enumerate() {
        if section.text.trim().is_empty() {
            anyhow::bail!("Section {} has an empty title", index + 1);
        }
        if section.page == 0 {
            anyhow::bail!(
                "Section {} ({}) has page 0, pages are 1-based",
                index + 1,
                section.text
            );
        }
    }
    Ok(())
}

/// Returns the same demonstration outline for any path.
/// Stands in for a real PDF extractor in demos.
pub struct SampleOutlineExtractor;

impl SampleOutlineExtractor {
    pub fn outline() -> Vec<Section> {
        vec![
            Section::new("H1", "Executive Summary", 1)
                .with_content("High-level overview of the document contents..."),
            Section::new("H2", "Introduction", 2)
                .with_content("Introduction and background information..."),
            Section::new("H2", "Methodology", 4)
                .with_content("Research methodology and approach..."),
            Section::new("H1", "Key Findings", 6).with_content("Main results and discoveries..."),
            Section::new("H2", "Data Analysis", 7)
                .with_content("Detailed data analysis and interpretation..."),
            Section::new("H2", "Market Trends", 9)
                .with_content("Current market trends and patterns..."),
            Section::new("H1", "Recommendations", 11)
                .with_content("Strategic recommendations based on findings..."),
            Section::new("H2", "Implementation Plan", 12)
                .with_content("Step-by-step implementation strategy..."),
            Section::new("H1", "Conclusion", 14).with_content("Summary and final thoughts..."),
        ]
    }
}

#[async_trait]
impl OutlineExtractor for SampleOutlineExtractor {
    async fn extract(&self, path: &Path) -> Result<ExtractedOutline> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sample.pdf".to_string());

        Ok(ExtractedOutline {
            file_name,
            file_size: 0,
            sections: Self::outline(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_outline(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("docsight-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_bare_array_outline() {
        let json = r#"[
            {"level": "H1", "text": "Overview", "page": 1, "content": "Body text."},
            {"level": "H2", "text": "Details", "page": 3}
        ]"#;
        let path = temp_outline(json);

        let extracted = JsonOutlineExtractor.extract(&path).await.unwrap();

        assert_eq!(extracted.sections.len(), 2);
        assert_eq!(
            extracted.sections[0].content.as_deref(),
            Some("Body text.")
        );
        assert!(extracted.sections[1].content.is_none());
        assert_eq!(
            extracted.file_name,
            path.file_name().unwrap().to_string_lossy()
        );
        assert_eq!(extracted.file_size, json.len() as u64);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_described_outline() {
        let json = r#"{
            "document": "guide.pdf",
            "file_size": 204800,
            "outline": [{"level": "H1", "text": "Overview", "page": 1}]
        }"#;
        let path = temp_outline(json);

        let extracted = JsonOutlineExtractor.extract(&path).await.unwrap();

        assert_eq!(extracted.file_name, "guide.pdf");
        assert_eq!(extracted.file_size, 204_800);
        assert_eq!(extracted.sections[0].text, "Overview");

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join(format!("docsight-missing-{}.json", uuid::Uuid::new_v4()));
        assert!(JsonOutlineExtractor.extract(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_json_is_error() {
        let path = temp_outline("{ not json");
        assert!(JsonOutlineExtractor.extract(&path).await.is_err());
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let path = temp_outline(r#"[{"level": "H1", "text": "  ", "page": 1}]"#);
        let err = JsonOutlineExtractor.extract(&path).await.unwrap_err();
        assert!(format!("{:#}", err).contains("empty title"));
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_zero_page_rejected() {
        let path = temp_outline(r#"[{"level": "H1", "text": "Intro", "page": 0}]"#);
        assert!(JsonOutlineExtractor.extract(&path).await.is_err());
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_sample_outline() {
        let extracted = SampleOutlineExtractor
            .extract(Path::new("uploads/report.pdf"))
            .await
            .unwrap();

        assert_eq!(extracted.file_name, "report.pdf");
        assert_eq!(extracted.sections.len(), 9);
        assert_eq!(extracted.sections[0].text, "Executive Summary");
        assert_eq!(extracted.sections[8].text, "Conclusion");
    }
}
