//! Conversion errors

use std::io;
use std::path::PathBuf;

use cachemap_properties::PropertyError;

use crate::config::ConfigError;

/// Error types for a conversion run
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Properties(#[from] PropertyError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to write XML: {0}")]
    Write(#[from] io::Error),

    #[error("Rendered XML is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Placeholder '{placeholder}' not found in template {}", template.display())]
    PlaceholderMissing {
        placeholder: String,
        template: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
