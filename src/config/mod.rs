//! Run configuration
//!
//! Resolved from three layers, later layers winning:
//! 1. Built-in defaults relative to the tool's base directory
//! 2. Optional `cachemap-xml.toml` in the base directory
//! 3. CLI `--source` flag

mod defaults;
mod file;

pub use defaults::{base_dir, BuiltinDefaults, CONFIG_FILE_NAME};
pub use file::ConfigFile;

use std::io;
use std::path::{Path, PathBuf};

use cachemap_properties::ParserOptions;

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Fully resolved configuration for one conversion run
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Cache property file to read
    pub source: PathBuf,
    /// XML template containing the placeholder
    pub template: PathBuf,
    /// Where the finished document is written
    pub output: PathBuf,
    /// Literal marker replaced by the generated maps
    pub placeholder: String,
    /// Property reader options
    pub parser: ParserOptions,
}

impl ConverterConfig {
    /// Built-in defaults anchored at `base`
    pub fn defaults_in(base: &Path) -> Self {
        let defaults = BuiltinDefaults::default();
        Self {
            source: base.join(&defaults.source),
            template: base.join(&defaults.template),
            output: base.join(&defaults.output),
            placeholder: defaults.placeholder,
            parser: ParserOptions {
                preserve_case: defaults.preserve_case,
            },
        }
    }

    /// Resolve the effective configuration.
    ///
    /// Reads `cachemap-xml.toml` from `base` when present, then applies the
    /// CLI source override.
    pub fn resolve(base: &Path, source_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::defaults_in(base);

        let file_path = base.join(CONFIG_FILE_NAME);
        if file_path.exists() {
            let file = ConfigFile::from_file(&file_path)?;
            tracing::debug!(path = %file_path.display(), "Loaded config file");
            config = config.with_file(&file, base);
        }

        if let Some(source) = source_override {
            config.source = source;
        }

        config.validate()?;
        Ok(config)
    }

    /// Overlay values present in a config file; relative paths resolve against `base`
    pub fn with_file(mut self, file: &ConfigFile, base: &Path) -> Self {
        if let Some(ref source) = file.source {
            self.source = base.join(source);
        }
        if let Some(ref template) = file.template {
            self.template = base.join(template);
        }
        if let Some(ref output) = file.output {
            self.output = base.join(output);
        }
        if let Some(ref placeholder) = file.placeholder {
            self.placeholder = placeholder.clone();
        }
        if let Some(preserve_case) = file.preserve_case {
            self.parser.preserve_case = preserve_case;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "placeholder cannot be empty".to_string(),
            ));
        }
        if self.output == self.template {
            return Err(ConfigError::Validation(format!(
                "output path must differ from template path ({})",
                self.template.display()
            )));
        }
        Ok(())
    }
}
