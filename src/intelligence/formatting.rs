use colored::Colorize;

use crate::intelligence::keywords::Query;
use crate::intelligence::types::{InsightKind, ProcessedDocument, RankedSection};

pub fn format_processed_document(document: &ProcessedDocument) -> String {
    let mut output = String::new();
    let intelligence = &document.intelligence;

    output.push_str(&"━".repeat(60));
    output.push('\n');
    output.push_str(&document.title.blue().bold().to_string());
    output.push('\n');
    output.push_str(
        &format!(
            "{} · ~{} pages · ~{} min read",
            document.source_path.display(),
            document.metadata.pages,
            document.metadata.estimated_reading_time
        )
        .bright_black()
        .to_string(),
    );
    output.push('\n');
    output.push_str(&format!(
        "Persona: {}  Job: {}\n\n",
        intelligence.metadata.persona.cyan(),
        intelligence.metadata.job_to_be_done.cyan()
    ));

    output.push_str(&"Top Sections".bold().to_string());
    output.push('\n');
    if intelligence.extracted_sections.is_empty() {
        output.push_str("  No sections found\n");
    }
    for (position, section) in intelligence.extracted_sections.iter().enumerate() {
        output.push_str(&format!(
            "  {:>2}. {} {}\n",
            position + 1,
            section.section_title,
            format!("(p. {}, outline #{})", section.page_number, section.importance_rank)
                .bright_black()
        ));
    }

    if !intelligence.subsection_analysis.is_empty() {
        output.push('\n');
        output.push_str(&"Excerpts".bold().to_string());
        output.push('\n');
        for excerpt in &intelligence.subsection_analysis {
            output.push_str(&format!(
                "  [{}] {} {}\n",
                excerpt.section_title.cyan(),
                truncate_with_ellipsis(&excerpt.refined_text, 120),
                format!("{}%", (excerpt.relevance_score * 100.0) as u32).green()
            ));
        }
    }

    if !intelligence.insights.is_empty() {
        output.push('\n');
        output.push_str(&"Insights".bold().to_string());
        output.push('\n');
        for insight in &intelligence.insights {
            let kind = match insight.kind {
                InsightKind::KeyFinding => insight.kind.to_string().yellow(),
                InsightKind::RelevantSection => insight.kind.to_string().cyan(),
                InsightKind::ActionItem => insight.kind.to_string().magenta(),
            };
            output.push_str(&format!(
                "  {} {} {} {}\n",
                "★".repeat(insight.importance as usize).yellow(),
                kind,
                format!("p. {}", insight.page).bright_black(),
                insight.text
            ));
        }
    }

    output
}

pub fn format_processed_documents(documents: &[ProcessedDocument]) -> String {
    if documents.is_empty() {
        return "No documents processed".to_string();
    }

    documents
        .iter()
        .map(format_processed_document)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per document, for the compact output format
pub fn format_compact(documents: &[ProcessedDocument]) -> String {
    if documents.is_empty() {
        return "No documents processed".to_string();
    }

    let mut output = String::new();
    for document in documents {
        let top = document
            .intelligence
            .extracted_sections
            .first()
            .map(|s| format!("{} (p. {})", s.section_title, s.page_number))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<32} {:>3} sections  top: {}\n",
            truncate_with_ellipsis(&document.title, 30),
            document.outline.len(),
            top
        ));
    }
    output
}

pub fn format_ranked_sections(ranked: &[RankedSection]) -> String {
    if ranked.is_empty() {
        return "No sections to rank".to_string();
    }

    let mut output = String::new();
    output.push_str(
        &format!(
            "{:<5} {:<8} {:<6} {:<44} {}\n",
            "#", "Score", "Level", "Section", "Page"
        )
        .bold()
        .to_string(),
    );
    output.push_str(&"─".repeat(72));
    output.push('\n');

    for (position, entry) in ranked.iter().enumerate() {
        let score = format!("{:.2}", entry.relevance_score);
        let score = if entry.relevance_score > 0.0 {
            score.green()
        } else {
            score.bright_black()
        };
        output.push_str(&format!(
            "{:<5} {:<8} {:<6} {:<44} {}\n",
            position + 1,
            score,
            entry.section.level,
            truncate_with_ellipsis(&entry.section.text, 42),
            entry.section.page
        ));
    }

    output
}

pub fn format_keywords(query: &Query) -> String {
    if query.is_empty() {
        return "No keywords (all tokens are 3 characters or shorter)".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{} keywords\n", query.len()).bold().to_string());
    for term in query.terms() {
        output.push_str(&format!("  {}\n", term.cyan()));
    }
    output
}

fn truncate_with_ellipsis(input: &str, max_chars: usize) -> String {
    if input.chars().count() > max_chars {
        format!("{}...", truncate_chars(input, max_chars.saturating_sub(3)))
    } else {
        input.to_string()
    }
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::intelligence::extractor::SampleOutlineExtractor;
    use crate::intelligence::keywords::extract_keywords;
    use crate::intelligence::metadata::estimate_metadata;
    use crate::intelligence::service::DocumentIntelligenceService;
    use crate::intelligence::types::Section;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abcdefghijkl", 10), "abcdefg...");
        assert_eq!(truncate_with_ellipsis("ééééééééééé", 5), "éé...");
    }

    #[test]
    fn test_format_keywords() {
        colored::control::set_override(false);
        let output = format_keywords(&extract_keywords("Travel Planner", ""));
        assert!(output.contains("2 keywords"));
        assert!(output.contains("  travel\n"));
        assert!(output.contains("  planner\n"));

        assert!(format_keywords(&extract_keywords("a", "b")).starts_with("No keywords"));
    }

    #[test]
    fn test_format_ranked_sections() {
        colored::control::set_override(false);
        let ranked = vec![RankedSection {
            section: Section::new("H1", "Executive Summary", 1),
            importance_rank: 1,
            relevance_score: 3.9,
        }];
        let output = format_ranked_sections(&ranked);

        assert!(output.contains("Executive Summary"));
        assert!(output.contains("3.90"));
        assert_eq!(format_ranked_sections(&[]), "No sections to rank");
    }

    #[test]
    fn test_format_processed_document() {
        colored::control::set_override(false);
        let service = DocumentIntelligenceService::new(
            &Config::default(),
            Arc::new(SampleOutlineExtractor),
        );
        let outline = SampleOutlineExtractor::outline();
        let document = ProcessedDocument {
            title: "sample report".to_string(),
            source_path: PathBuf::from("reports/sample-report.pdf"),
            metadata: estimate_metadata(153_600),
            intelligence: service.analyze(
                "sample-report.pdf",
                &outline,
                "Market analyst",
                "Review data trends",
            ),
            outline,
        };

        let output = format_processed_document(&document);

        assert!(output.contains("sample report\n"));
        assert!(output.contains("reports/sample-report.pdf · ~3 pages · ~4 min read"));
        assert!(output.contains("Persona: Market analyst  Job: Review data trends"));
        assert!(output.contains("Top Sections\n"));
        assert!(output.contains("   1. Market Trends (p. 9, outline #6)\n"));
        assert!(output.contains("   2. Data Analysis (p. 7, outline #5)\n"));
        assert!(output.contains("[Market Trends] Current market trends and patterns"));
        assert!(output.contains("key_finding p. 9"));
        assert!(output.contains("relevant_section"));
        assert!(output.contains("action_item"));
        assert!(!output.contains("No sections found"));
    }

    #[test]
    fn test_format_empty_documents() {
        assert_eq!(format_processed_documents(&[]), "No documents processed");
        assert_eq!(format_compact(&[]), "No documents processed");
    }
}
