//! Cache property files.
//!
//! Reads flat `key=value` property files and groups the `cache.*` entries by
//! logical cache name, preserving the order in which caches and their
//! attributes first appear.

mod group;
mod parser;

pub use group::{group_by_cache, CacheGroup, CacheName, CACHE_NAME_SUFFIX, ROOT_SEGMENT};
pub use parser::{parse_properties, read_properties, ParserOptions, RawProperty};

use std::io;
use std::path::PathBuf;

/// Error types for property file operations
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("Failed to read property file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed property at line {line}: '{content}' (expected key=value)")]
    Malformed { line: usize, content: String },

    #[error("Duplicate property '{key}' at line {line} (first defined at line {first_line})")]
    DuplicateKey {
        key: String,
        line: usize,
        first_line: usize,
    },
}
