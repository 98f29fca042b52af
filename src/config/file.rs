//! Optional TOML config file (layer 2)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigError;

/// Contents of `cachemap-xml.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub source: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub placeholder: Option<String>,
    pub preserve_case: Option<bool>,
}

impl ConfigFile {
    /// Load and parse config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&contents)
    }

    /// Parse config from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = ConfigFile::from_str("").unwrap();
        assert!(file.source.is_none());
        assert!(file.placeholder.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ConfigFile::from_str("verbose = true").is_err());
    }

    #[test]
    fn test_partial_file() {
        let file = ConfigFile::from_str("output = \"out/hz.xml\"").unwrap();
        assert_eq!(file.output, Some(PathBuf::from("out/hz.xml")));
        assert!(file.preserve_case.is_none());
    }
}
