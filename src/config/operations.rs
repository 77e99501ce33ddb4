//! Config loading, serialization, and validation.

use super::model::Config;
use crate::error::{JoistError, Result};
use crate::template::{TemplateRole, is_valid_identifier};
use std::fs;
use std::path::Path;

impl Config {
    /// Config file name looked up in the working directory when no explicit
    /// `--config` path is given.
    pub const DEFAULT_FILE_NAME: &'static str = "joist.yaml";

    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            JoistError::UserError(format!(
                "failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            JoistError::UserError(format!(
                "failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config for a run.
    ///
    /// An explicit path must load; otherwise `joist.yaml` in the working
    /// directory is used when present, and defaults apply when it is not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(Self::DEFAULT_FILE_NAME);
                if local.exists() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| JoistError::UserError(format!("failed to serialize config: {}", e)))
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_identifier(&self.namespace) {
            return Err(JoistError::UserError(format!(
                "invalid config namespace '{}': must be an identifier",
                self.namespace
            )));
        }

        for (what, suffix) in [
            ("class_suffix", &self.class_suffix),
            ("test_class_suffix", &self.test_class_suffix),
        ] {
            if !is_valid_identifier(suffix) {
                return Err(JoistError::UserError(format!(
                    "invalid config {} '{}': must be an identifier",
                    what, suffix
                )));
            }
        }

        for role_name in self.templates.keys() {
            if TemplateRole::from_str(role_name).is_none() {
                return Err(JoistError::UserError(format!(
                    "unknown template role '{}' in config (expected one of: {})",
                    role_name,
                    TemplateRole::ALL
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }
        }

        Ok(())
    }
}
