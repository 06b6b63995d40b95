// Copyright 2025 Muvon Un Limited
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
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bounds that keep results within 10 sections and 5 x 3 excerpts
pub const MAX_TOP_SECTIONS: usize = 10;
pub const MAX_EXCERPT_SECTIONS: usize = 5;
pub const MAX_SENTENCES_PER_SECTION: usize = 3;

/// Boost factors applied to a section's keyword hit count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Multiplier for sections whose heading level is exactly "H1"
    pub h1_boost: f64,
    /// Multiplier for titles containing "summary"
    pub summary_boost: f64,
    /// Multiplier for titles containing "conclusion"
    pub conclusion_boost: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            h1_boost: 1.5,
            summary_boost: 1.3,
            conclusion_boost: 1.2,
        }
    }
}

/// Limits for excerpt and insight generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Ranked sections kept in `extracted_sections`
    pub top_sections: usize,
    /// Leading ranked sections considered for excerpts
    pub excerpt_sections: usize,
    /// Sentences kept per section
    pub sentences_per_section: usize,
    /// Sentences must be strictly longer than this after trimming
    pub min_sentence_chars: usize,
    /// Content characters embedded in an insight text
    pub insight_preview_chars: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            top_sections: MAX_TOP_SECTIONS,
            excerpt_sections: MAX_EXCERPT_SECTIONS,
            sentences_per_section: MAX_SENTENCES_PER_SECTION,
            min_sentence_chars: 10,
            insight_preview_chars: 100,
        }
    }
}

/// Fallback persona and job used when the caller supplies none
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub persona: String,
    pub job_to_be_done: String,
}

impl DefaultsConfig {
    /// Persona and job with these defaults substituted for empty or blank values
    pub fn resolve(&self, persona: &str, job: &str) -> (String, String) {
        let persona = if persona.trim().is_empty() {
            self.persona.clone()
        } else {
            persona.to_string()
        };
        let job = if job.trim().is_empty() {
            self.job_to_be_done.clone()
        } else {
            job.to_string()
        };
        (persona, job)
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            persona: "General User".to_string(),
            job_to_be_done: "Document Analysis".to_string(),
        }
    }
}

/// Main configuration for docsight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ranking: RankingConfig,
    pub synthesis: SynthesisConfig,
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Load configuration from config.toml file
    /// First tries to load from system config directory, falls back to embedded template
    pub fn load() -> Result<Self> {
        let config_path = crate::storage::get_system_config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            // Config doesn't exist, create from template
            let template_content = include_str!("../config-templates/default.toml");
            let config = Self::from_toml_str(template_content)?;

            if let Some(parent) = config_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&config_path, template_content)?;

            Ok(config)
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let boosts = [
            ("ranking.h1_boost", self.ranking.h1_boost),
            ("ranking.summary_boost", self.ranking.summary_boost),
            ("ranking.conclusion_boost", self.ranking.conclusion_boost),
        ];
        for (name, value) in boosts {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} must be a non-negative number, got {}", name, value);
            }
        }
        let limits = [
            (
                "synthesis.top_sections",
                self.synthesis.top_sections,
                MAX_TOP_SECTIONS,
            ),
            (
                "synthesis.excerpt_sections",
                self.synthesis.excerpt_sections,
                MAX_EXCERPT_SECTIONS,
            ),
            (
                "synthesis.sentences_per_section",
                self.synthesis.sentences_per_section,
                MAX_SENTENCES_PER_SECTION,
            ),
        ];
        for (name, value, max) in limits {
            if value > max {
                anyhow::bail!("{} must be at most {}, got {}", name, max, value);
            }
        }
        if self.synthesis.excerpt_sections > self.synthesis.top_sections {
            anyhow::bail!(
                "synthesis.excerpt_sections ({}) cannot exceed synthesis.top_sections ({})",
                self.synthesis.excerpt_sections,
                self.synthesis.top_sections
            );
        }
        Ok(())
    }
}
