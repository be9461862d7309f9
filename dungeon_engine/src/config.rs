//! Engine settings loaded from `dungeon.toml`.
//!
//! Every field is optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::data_paths::data_path;
use crate::text::DEFAULT_WRAP_WIDTH;

pub const CONFIG_FILE: &str = "dungeon.toml";
pub const MIN_WRAP_WIDTH: usize = 60;
pub const MAX_WRAP_WIDTH: usize = 72;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Column at which turn descriptions wrap.
    pub wrap_width: usize,
    /// World file, relative to the data directory unless absolute.
    pub world_file: PathBuf,
    /// Keep rustyline history between sessions.
    pub history: bool,
    /// Color the REPL chrome.
    pub color: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            world_file: PathBuf::from("world.ron"),
            history: true,
            color: true,
        }
    }
}

impl EngineConfig {
    /// Load `dungeon.toml` from the data directory.
    ///
    /// # Errors
    /// - see [`EngineConfig::load_from`]
    pub fn load() -> Result<Self> {
        Self::load_from(&data_path(CONFIG_FILE))
    }

    /// Load settings from `path`, falling back to defaults if the file doesn't exist.
    ///
    /// # Errors
    /// - the file exists but can't be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("no config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading engine config from '{}'", path.display()))?;
        let config: EngineConfig =
            toml::from_str(&contents).with_context(|| format!("parsing engine config TOML from '{}'", path.display()))?;
        info!("engine config loaded from '{}'", path.display());
        Ok(config.normalized())
    }

    /// Clamp out-of-range values.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let clamped = self.wrap_width.clamp(MIN_WRAP_WIDTH, MAX_WRAP_WIDTH);
        if clamped != self.wrap_width {
            warn!(
                "wrap_width {} out of range {MIN_WRAP_WIDTH}..={MAX_WRAP_WIDTH}; using {clamped}",
                self.wrap_width
            );
            self.wrap_width = clamped;
        }
        self
    }

    /// Where the world file actually lives.
    pub fn world_path(&self) -> PathBuf {
        if self.world_file.is_absolute() {
            self.world_file.clone()
        } else {
            data_path(&self.world_file)
        }
    }
}
