use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DotdashError;
use crate::types::{Direction, SeparatorMode};

/// Startup configuration shared by the binaries and [`crate::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word separator convention.
    pub separator: SeparatorMode,
    /// Initial conversion direction.
    pub direction: Direction,
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self, DotdashError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a JSON configuration file. An empty file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DotdashError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json_str(&text).map_err(|e| {
            DotdashError::Config(format!("{}: {}", path.display(), e))
        })
    }

    pub fn to_json_string(&self) -> Result<String, DotdashError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
