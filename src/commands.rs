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

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::cli::Commands;
use crate::config::Config;
use crate::intelligence::formatting;
use crate::intelligence::{
    extract_keywords, DocumentIntelligenceService, JsonOutlineExtractor, ProcessedDocument,
    SampleOutlineExtractor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Compact,
}

impl OutputFormat {
    fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "compact" => Ok(OutputFormat::Compact),
            other => anyhow::bail!(
                "Unknown output format '{}', expected text, json, or compact",
                other
            ),
        }
    }
}

pub async fn execute(config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            outlines,
            persona,
            job,
            format,
            output,
        } => {
            let format = OutputFormat::parse(&format)?;
            let service = DocumentIntelligenceService::new(config, Arc::new(JsonOutlineExtractor));
            let documents = service.process_documents(&outlines, &persona, &job).await;

            if documents.is_empty() {
                anyhow::bail!("None of the {} outline(s) could be processed", outlines.len());
            }
            if documents.len() < outlines.len() {
                warn!(
                    processed = documents.len(),
                    requested = outlines.len(),
                    "Some documents were skipped"
                );
            }

            if let Some(path) = output {
                write_json(&path, &documents).await?;
            }
            print_documents(&documents, format)
        }
        Commands::Rank {
            outline,
            persona,
            job,
            format,
        } => {
            let format = OutputFormat::parse(&format)?;
            let service = DocumentIntelligenceService::new(config, Arc::new(JsonOutlineExtractor));
            let ranked = service.rank_document(&outline, &persona, &job).await?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
                OutputFormat::Compact => println!("{}", serde_json::to_string(&ranked)?),
                OutputFormat::Text => println!("{}", formatting::format_ranked_sections(&ranked)),
            }
            Ok(())
        }
        Commands::Keywords { persona, job } => {
            let (persona, job) = config.defaults.resolve(&persona, &job);
            let query = extract_keywords(&persona, &job);
            println!("{}", formatting::format_keywords(&query));
            Ok(())
        }
        Commands::Demo {
            persona,
            job,
            format,
        } => {
            let format = OutputFormat::parse(&format)?;
            let service =
                DocumentIntelligenceService::new(config, Arc::new(SampleOutlineExtractor));
            let document = service
                .process_document(Path::new("sample-report.pdf"), &persona, &job)
                .await?;
            print_documents(&[document], format)
        }
        Commands::Config => {
            let path = crate::storage::get_system_config_path()?;
            println!("Config file: {}", path.display());
            println!();
            println!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}

fn print_documents(documents: &[ProcessedDocument], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(documents)?),
        OutputFormat::Compact => print!("{}", formatting::format_compact(documents)),
        OutputFormat::Text => println!("{}", formatting::format_processed_documents(documents)),
    }
    Ok(())
}

async fn write_json(path: &Path, documents: &[ProcessedDocument]) -> Result<()> {
    let json = serde_json::to_string_pretty(documents)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    info!(path = %path.display(), documents = documents.len(), "Wrote results");
    Ok(())
}
