//! cachemap-xml - cache property file to distributed map XML
//!
//! Reads a flat `cache.*` property file, keeps the caches configured as
//! `fully-distributed`, and renders each one as a `<map>` element spliced
//! into an XML template.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod render;

pub use cachemap_properties::{CacheGroup, CacheName, ParserOptions, PropertyError};
pub use config::{ConfigError, ConverterConfig};
pub use descriptor::{build_maps, CacheDescriptor, MapConfig};
pub use error::{ConvertError, Result};
pub use pipeline::{convert, run, Conversion, RunReport};
