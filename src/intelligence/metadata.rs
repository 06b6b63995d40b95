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

use chrono::Utc;

use crate::intelligence::types::DocumentMetadata;

/// Average bytes per PDF page used for page estimation
const BYTES_PER_PAGE: f64 = 51_200.0;
const WORDS_PER_PAGE: f64 = 250.0;
const WORDS_PER_MINUTE: f64 = 200.0;

/// Rough page count from file size, at least 1
pub fn estimate_page_count(file_size: u64) -> u32 {
    ((file_size as f64 / BYTES_PER_PAGE).round() as u32).max(1)
}

/// Rough reading time in minutes, at least 1
pub fn estimate_reading_time(file_size: u64) -> u32 {
    let words = estimate_page_count(file_size) as f64 * WORDS_PER_PAGE;
    ((words / WORDS_PER_MINUTE).round() as u32).max(1)
}

/// Human readable title from a file name: "trip_plan-2024.pdf" -> "trip plan 2024"
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = match file_name.len().checked_sub(4) {
        Some(split)
            if file_name.is_char_boundary(split)
                && file_name[split..].eq_ignore_ascii_case(".pdf") =>
        {
            &file_name[..split]
        }
        _ => file_name,
    };

    stem.replace(['_', '-'], " ")
}

pub fn estimate_metadata(file_size: u64) -> DocumentMetadata {
    DocumentMetadata {
        pages: estimate_page_count(file_size),
        language: "English".to_string(),
        estimated_reading_time: estimate_reading_time(file_size),
        file_size,
        created_at: Utc::now(),
    }
}
