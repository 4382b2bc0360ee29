//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PolextError, Result};

/// Main configuration for the polext pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolextConfig {
    /// Sample documents processed by the no-argument commands.
    pub samples: SamplesConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Fixed set of named sample documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    /// Directory holding all sample files.
    pub dir: PathBuf,

    /// Documents, processed in order.
    pub documents: Vec<SampleDocument>,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("samples"),
            documents: vec![SampleDocument::named("motor"), SampleDocument::named("health")],
        }
    }
}

/// File names for one sample document, relative to [`SamplesConfig::dir`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDocument {
    /// Short name, also used for the `<NAME> JSON` heading.
    pub name: String,
    /// Raw text input.
    pub raw: String,
    /// Cleaned line sequence.
    pub clean: String,
    /// Extraction JSON.
    pub output: String,
}

impl SampleDocument {
    /// Conventional `<name>_raw.txt`, `<name>_clean.txt`, `<name>_output.json`.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            raw: format!("{name}_raw.txt"),
            clean: format!("{name}_clean.txt"),
            output: format!("{name}_output.json"),
        }
    }
}

/// Resolved paths for one sample document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePaths {
    pub raw: PathBuf,
    pub clean: PathBuf,
    pub output: PathBuf,
}

impl SamplesConfig {
    /// Resolve a document's files under the sample directory.
    pub fn paths(&self, doc: &SampleDocument) -> SamplePaths {
        SamplePaths {
            raw: self.dir.join(&doc.raw),
            clean: self.dir.join(&doc.clean),
            output: self.dir.join(&doc.output),
        }
    }

    /// Look up a document by name (case-insensitive).
    pub fn find(&self, name: &str) -> Result<&SampleDocument> {
        self.documents
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PolextError::Config(format!("unknown sample document: {name}")))
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write JSON with 2-space indentation.
    pub pretty: bool,

    /// Echo extraction JSON to stdout.
    pub echo: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            echo: true,
        }
    }
}

impl PolextConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_samples_are_motor_and_health() {
        let config = PolextConfig::default();
        let names: Vec<&str> = config.samples.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["motor", "health"]);

        let motor = config.samples.find("MOTOR").unwrap();
        assert_eq!(
            config.samples.paths(motor),
            SamplePaths {
                raw: PathBuf::from("samples/motor_raw.txt"),
                clean: PathBuf::from("samples/motor_clean.txt"),
                output: PathBuf::from("samples/motor_output.json"),
            }
        );
    }

    #[test]
    fn test_unknown_sample_is_config_error() {
        let config = PolextConfig::default();
        assert!(matches!(config.samples.find("travel"), Err(PolextError::Config(_))));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PolextConfig = serde_json::from_str(r#"{"output": {"echo": false}}"#).unwrap();
        assert!(!config.output.echo);
        assert!(config.output.pretty);
        assert_eq!(config.samples, SamplesConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = PolextConfig::default();
        config.samples.dir = PathBuf::from("/data/policies");
        config.save(&path).unwrap();

        assert_eq!(PolextConfig::from_file(&path).unwrap(), config);
    }
}
