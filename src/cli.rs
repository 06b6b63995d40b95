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

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docsight")]
#[command(version, author = "Muvon Un Limited <opensource@muvon.io>")]
#[command(about = "Persona-driven relevance ranking and insight extraction for document outlines", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Also write structured JSON logs to a daily rotated file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more outline files for a persona and job
    Analyze {
        /// Outline JSON files produced by an outline extractor
        #[arg(required = true)]
        outlines: Vec<PathBuf>,

        /// Who is reading (defaults to the configured persona)
        #[arg(short, long, default_value = "")]
        persona: String,

        /// What the reader wants to get done (defaults to the configured job)
        #[arg(short, long, default_value = "")]
        job: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write the JSON results to this file as well
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the full ranked outline of a single outline file
    Rank {
        /// Outline JSON file
        outline: PathBuf,

        /// Who is reading (defaults to the configured persona)
        #[arg(short, long, default_value = "")]
        persona: String,

        /// What the reader wants to get done (defaults to the configured job)
        #[arg(short, long, default_value = "")]
        job: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the query terms derived from a persona and job
    Keywords {
        /// Who is reading (defaults to the configured persona)
        #[arg(short, long, default_value = "")]
        persona: String,

        /// What the reader wants to get done (defaults to the configured job)
        #[arg(short, long, default_value = "")]
        job: String,
    },

    /// Run the analysis on the built-in sample outline
    Demo {
        /// Who is reading (defaults to the configured persona)
        #[arg(short, long, default_value = "")]
        persona: String,

        /// What the reader wants to get done (defaults to the configured job)
        #[arg(short, long, default_value = "")]
        job: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the configuration file location and active values
    Config,
}
