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
use std::path::{Path, PathBuf};

/// Path of config.toml inside the platform data directory
/// ($XDG_DATA_HOME or ~/.local/share on Linux, Application Support on macOS, %APPDATA% on Windows).
/// The directory itself is created by `Config::load` on first run.
pub fn get_system_config_path() -> Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to determine data directory"))?;
    Ok(config_path_in(&data_dir))
}

fn config_path_in(data_dir: &Path) -> PathBuf {
    data_dir.join("docsight").join("config.toml")
}
