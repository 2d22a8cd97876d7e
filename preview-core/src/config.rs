use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::document::Strictness;
use crate::error::{PreviewError, Result};
use crate::rules::PreviewRules;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Reject block headers that are not terminated by a newline.
    pub strict: bool,
    pub dry_run: bool,
    pub rules: PreviewRules,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("assets/bots/prizes.animation"),
            output_dir: PathBuf::from("assets/prize_previews"),
            strict: false,
            dry_run: false,
            rules: PreviewRules::default(),
        }
    }
}

impl PreviewConfig {
    pub fn strictness(&self) -> Strictness {
        if self.strict { Strictness::Strict } else { Strictness::Lenient }
    }

    pub fn load_from_yaml_str(s: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_err = |reason: String| PreviewError::Config { path: path.to_path_buf(), reason };
        let data = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        Self::load_from_yaml_str(&data).map_err(|e| config_err(e.to_string()))
    }
}
