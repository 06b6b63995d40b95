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

//! Persona-driven relevance ranking for document outlines.
//!
//! Pipeline: `keywords` turns persona + job into query terms, `ranker`
//! orders outline sections against them, `synthesizer` lifts excerpts and
//! insights from the top of the ranking, and `service` wires the stages
//! together per document behind an `OutlineExtractor`.

pub mod extractor;
pub mod formatting;
pub mod keywords;
pub mod metadata;
pub mod ranker;
pub mod service;
pub mod synthesizer;
pub mod types;


pub use extractor::{JsonOutlineExtractor, OutlineExtractor, SampleOutlineExtractor};
pub use keywords::extract_keywords;
pub use service::DocumentIntelligenceService;
pub use types::ProcessedDocument;
