//! Conversion pipeline
//!
//! Implements the single-shot run:
//! 1. Read and group the cache property file
//! 2. Build map configs for `fully-distributed` caches
//! 3. Render the maps and splice them into the template
//! 4. Pretty-print and write the output document

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use cachemap_properties::{group_by_cache, parse_properties, CacheName};

use crate::config::ConverterConfig;
use crate::descriptor::build_maps;
use crate::error::{ConvertError, Result};
use crate::render::{pretty_print, render_maps, substitute};

/// A file that took part in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    pub path: PathBuf,
    /// SHA-256 of the file bytes, hex encoded
    pub sha256: String,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub source: FileDigest,
    pub template: FileDigest,
    pub output: FileDigest,
    /// Emitted maps, in output order
    pub maps: Vec<CacheName>,
    /// Caches left out because they are not `fully-distributed`
    pub skipped: Vec<CacheName>,
}

/// Output of a conversion, before anything is written
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Finished, pretty-printed document
    pub document: String,
    pub maps: Vec<CacheName>,
    pub skipped: Vec<CacheName>,
}

/// Produce the output document from in-memory inputs
pub fn convert(properties: &str, template: &str, config: &ConverterConfig) -> Result<Conversion> {
    let parsed = parse_properties(properties, &config.parser)?;
    let outcome = build_maps(group_by_cache(&parsed));
    let block = render_maps(&outcome.maps)?;

    let document = substitute(template, &config.placeholder, &block).ok_or_else(|| {
        ConvertError::PlaceholderMissing {
            placeholder: config.placeholder.clone(),
            template: config.template.clone(),
        }
    })?;

    Ok(Conversion {
        document: pretty_print(&document)?,
        maps: outcome.maps.into_iter().map(|m| m.name).collect(),
        skipped: outcome.skipped,
    })
}

/// Run a full conversion from files on disk
pub fn run(config: &ConverterConfig) -> Result<RunReport> {
    tracing::debug!(source = %config.source.display(), "Reading cache properties");
    let properties = read_file(&config.source)?;
    let template = read_file(&config.template)?;

    let conversion = convert(&properties, &template, config)?;
    write_file(&config.output, conversion.document.as_bytes())?;

    tracing::info!(
        output = %config.output.display(),
        maps = conversion.maps.len(),
        skipped = conversion.skipped.len(),
        "Wrote cache map configuration"
    );

    Ok(RunReport {
        source: FileDigest::of(&config.source, properties.as_bytes()),
        template: FileDigest::of(&config.template, template.as_bytes()),
        output: FileDigest::of(&config.output, conversion.document.as_bytes()),
        maps: conversion.maps,
        skipped: conversion.skipped,
    })
}

impl FileDigest {
    fn of(path: &Path, bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self {
            path: path.to_path_buf(),
            sha256: hex::encode(hasher.finalize()),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    fs::write(path, bytes).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<hazelcast>\n    <!-- @CACHE_MAPS@ -->\n</hazelcast>\n";

    fn config() -> ConverterConfig {
        ConverterConfig::defaults_in(Path::new("/nonexistent"))
    }

    #[test]
    fn test_convert_inline() {
        let props = "cache.aCache.cluster.type=fully-distributed\ncache.aCache.backup-count=2\n";
        let conversion = convert(props, TEMPLATE, &config()).unwrap();
        let expected = [
            "<hazelcast>",
            "    <map name=\"cache.aCache\">",
            "        <backup-count>2</backup-count>",
            "        <per-entry-stats-enabled>true</per-entry-stats-enabled>",
            "    </map>",
            "</hazelcast>",
            "",
        ]
        .join("\n");
        assert_eq!(conversion.document, expected);
        assert_eq!(conversion.maps.len(), 1);
        assert!(conversion.skipped.is_empty());
    }

    #[test]
    fn test_convert_missing_placeholder() {
        let err = convert("cache.a.b=1", "<hazelcast/>", &config()).unwrap_err();
        match err {
            ConvertError::PlaceholderMissing { placeholder, .. } => {
                assert_eq!(placeholder, "<!-- @CACHE_MAPS@ -->");
            }
            other => panic!("Expected PlaceholderMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_no_distributed_caches() {
        let props = "cache.aCache.cluster.type=local\n";
        let conversion = convert(props, TEMPLATE, &config()).unwrap();
        assert_eq!(conversion.document, "<hazelcast/>\n");
        assert!(conversion.maps.is_empty());
        assert_eq!(conversion.skipped.len(), 1);
    }

    #[test]
    fn test_convert_propagates_parse_error() {
        let err = convert("garbage line", TEMPLATE, &config()).unwrap_err();
        assert!(matches!(err, ConvertError::Properties(_)));
    }

    #[test]
    fn test_file_digest() {
        let digest = FileDigest::of(Path::new("empty"), b"");
        assert_eq!(
            digest.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
