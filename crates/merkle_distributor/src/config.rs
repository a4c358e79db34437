use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR};
use crate::error::{DistributorError, Result};

/// Publishing configuration loaded from TOML.
///
/// Every field is optional in the file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistributorConfig {
    /// Directory distribution documents are written into
    pub output_dir: PathBuf,
    /// File name prefix, `<prefix>-<cycle>-<content hash>.json`
    pub file_prefix: String,
    /// Pretty-print the JSON document
    pub pretty: bool,
    /// Re-check every proof against the root before writing
    pub verify_before_publish: bool,
}

impl Default for DistributorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            pretty: true,
            verify_before_publish: true,
        }
    }
}

impl DistributorConfig {
    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| DistributorError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace `output_dir` when an override is given (the CLI `--output` flag)
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_prefix.is_empty() {
            return Err(DistributorError::InvalidConfig(
                "file_prefix must not be empty".into(),
            ));
        }
        if self.file_prefix.contains(&['/', '\\'][..]) {
            return Err(DistributorError::InvalidConfig(format!(
                "file_prefix must be a plain file name, got {}",
                self.file_prefix
            )));
        }
        Ok(())
    }
}
