//! Cache-name grouping
//!
//! A cache key looks like `cache.<name>.<attribute...>`. The cache name ends at
//! the first segment whose text ends in `Cache`; keys without such a segment
//! use the first two segments as the name.

use std::collections::HashMap;
use std::fmt;

use crate::RawProperty;

/// First segment every cache key must carry
pub const ROOT_SEGMENT: &str = "cache";

/// Suffix marking the segment that closes a cache name
pub const CACHE_NAME_SUFFIX: &str = "Cache";

/// Logical cache identifier, e.g. `cache.nodeOwnerCache`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheName(String);

impl CacheName {
    /// Split a dotted key into its cache name and attribute key.
    ///
    /// Returns `None` when the key is not under the `cache` root or has no
    /// attribute part after the name.
    pub fn from_key(key: &str) -> Option<(CacheName, String)> {
        let segments: Vec<&str> = key.split('.').collect();
        if segments.first() != Some(&ROOT_SEGMENT) {
            return None;
        }

        let boundary = segments
            .iter()
            .position(|segment| segment.ends_with(CACHE_NAME_SUFFIX))
            .unwrap_or(1);

        if boundary + 1 >= segments.len() {
            return None;
        }

        let name = segments[..=boundary].join(".");
        let attribute = segments[boundary + 1..].join(".");
        Some((CacheName(name), attribute))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// All attributes of one cache, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheGroup {
    pub name: CacheName,
    pub attributes: Vec<(String, String)>,
}

/// Group properties by cache name.
///
/// Groups appear in the order their first key was seen; attributes keep
/// source order within each group.
pub fn group_by_cache(properties: &[RawProperty]) -> Vec<CacheGroup> {
    let mut groups: Vec<CacheGroup> = Vec::new();
    let mut index: HashMap<CacheName, usize> = HashMap::new();

    for property in properties {
        let Some((name, attribute)) = CacheName::from_key(&property.key) else {
            tracing::debug!(key = %property.key, line = property.line, "Discarding non-cache property");
            continue;
        };

        let slot = *index.entry(name.clone()).or_insert_with(|| {
            groups.push(CacheGroup {
                name,
                attributes: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot]
            .attributes
            .push((attribute, property.value.clone()));
    }

    groups
}
