//! Test fixtures for cache map conversion
//!
//! - `caches.properties`: mixed distributed, local and untyped caches
//! - `template.xml`: minimal template carrying the placeholder
//! - `expected.xml`: golden output for the two files above

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use cachemap_xml::ConverterConfig;

/// Directory holding the conversion fixtures
pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cachemap")
}

/// Path to a named fixture file
pub fn fixture(name: &str) -> PathBuf {
    fixture_dir().join(name)
}

/// Config reading the standard fixtures and writing into `out_dir`
pub fn fixture_config(out_dir: &Path) -> ConverterConfig {
    let mut config = ConverterConfig::defaults_in(&fixture_dir());
    config.source = fixture("caches.properties");
    config.template = fixture("template.xml");
    config.output = out_dir.join("hazelcast.xml");
    config
}
