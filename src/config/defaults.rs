//! Built-in defaults (layer 1)

use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "cachemap-xml.toml";

/// Built-in default configuration values
#[derive(Debug, Clone)]
pub struct BuiltinDefaults {
    /// Source property file, relative to the base directory
    pub source: PathBuf,

    /// Template document, relative to the base directory
    pub template: PathBuf,

    /// Output document, relative to the base directory
    pub output: PathBuf,

    /// Marker comment replaced by the generated maps
    pub placeholder: String,

    /// Keep property keys as written (default: true)
    pub preserve_case: bool,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            source: PathBuf::from("resources/caches.properties"),
            template: PathBuf::from("resources/hazelcast-template.xml"),
            output: PathBuf::from("target/hazelcast.xml"),
            placeholder: "<!-- @CACHE_MAPS@ -->".to_string(),
            preserve_case: true,
        }
    }
}

/// Directory the default paths are resolved against: the package directory
pub fn base_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_are_relative() {
        let defaults = BuiltinDefaults::default();
        assert!(defaults.source.is_relative());
        assert!(defaults.template.is_relative());
        assert!(defaults.output.is_relative());
    }

    #[test]
    fn test_base_dir_contains_resources() {
        let defaults = BuiltinDefaults::default();
        assert!(base_dir().join(&defaults.source).exists());
        assert!(base_dir().join(&defaults.template).exists());
    }
}
