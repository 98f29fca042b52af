//! Cache descriptors
//!
//! A descriptor is one cache's attribute set. Descriptors for
//! `fully-distributed` caches are classified into a [`MapConfig`], the
//! render-ready form of a `<map>` element.

mod attribute;

pub use attribute::{
    Attribute, NearCacheSetting, EVICTION_POLICY_KEY, MAX_ITEMS_KEY, NEAR_CACHE_PREFIX,
};

use cachemap_properties::{CacheGroup, CacheName};

/// Attribute selecting the cluster mode of a cache
pub const CLUSTER_TYPE_KEY: &str = "cluster.type";

/// The only cluster mode that produces a `<map>` element
pub const FULLY_DISTRIBUTED: &str = "fully-distributed";

/// Max-size policy of map-level eviction
pub const MAP_MAX_SIZE_POLICY: &str = "PER_NODE";

/// Max-size policy of near-cache eviction
pub const NEAR_CACHE_MAX_SIZE_POLICY: &str = "ENTRY_COUNT";

/// Eviction policy of near-cache eviction
pub const NEAR_CACHE_EVICTION_POLICY: &str = "LRU";

/// Size used when a map-level eviction has no `maxItems` sibling
pub const DEFAULT_EVICTION_SIZE: &str = "0";

/// One cache's attributes, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDescriptor {
    pub name: CacheName,
    pub attributes: Vec<(String, String)>,
}

/// A classified `<map>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    pub name: CacheName,
    /// Children in output order; `per-entry-stats-enabled` is always appended on render
    pub children: Vec<MapChild>,
}

/// A child of `<map>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapChild {
    Text { element: &'static str, value: String },
    Eviction { policy: String, size: String },
    NearCache(NearCacheConfig),
}

/// The `<near-cache>` subtree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NearCacheConfig {
    pub children: Vec<NearCacheChild>,
}

/// A child of `<near-cache>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NearCacheChild {
    Text { element: &'static str, value: String },
    Eviction { size: String },
}

impl From<CacheGroup> for CacheDescriptor {
    fn from(group: CacheGroup) -> Self {
        Self {
            name: group.name,
            attributes: group.attributes,
        }
    }
}

impl CacheDescriptor {
    /// Look up an attribute by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether this cache is emitted at all
    pub fn is_fully_distributed(&self) -> bool {
        self.get(CLUSTER_TYPE_KEY) == Some(FULLY_DISTRIBUTED)
    }

    /// Classify attributes into a render-ready map element
    pub fn to_map_config(&self) -> MapConfig {
        let mut children: Vec<MapChild> = Vec::new();
        // Opened on the first near-cache attribute, at that position
        let mut near_cache: Option<(usize, NearCacheConfig)> = None;

        for (key, value) in &self.attributes {
            match Attribute::classify(key) {
                Attribute::Basic(element) => children.push(MapChild::Text {
                    element,
                    value: value.clone(),
                }),
                Attribute::Eviction => children.push(MapChild::Eviction {
                    policy: value.clone(),
                    size: self
                        .get(MAX_ITEMS_KEY)
                        .unwrap_or(DEFAULT_EVICTION_SIZE)
                        .to_string(),
                }),
                Attribute::NearCache(setting) => {
                    let position = children.len();
                    let (_, near) = near_cache.get_or_insert_with(|| (position, NearCacheConfig::default()));
                    match setting {
                        NearCacheSetting::Size => near.children.push(NearCacheChild::Eviction {
                            size: value.clone(),
                        }),
                        NearCacheSetting::Text(element) => near.children.push(NearCacheChild::Text {
                            element,
                            value: value.clone(),
                        }),
                        NearCacheSetting::Unrecognized => {
                            tracing::debug!(cache = %self.name, key = %key, "Ignoring unknown near-cache setting");
                        }
                    }
                }
                Attribute::Ignored => {}
            }
        }

        if let Some((position, near)) = near_cache {
            children.insert(position, MapChild::NearCache(near));
        }

        MapConfig {
            name: self.name.clone(),
            children,
        }
    }
}

/// Result of building descriptors from cache groups
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    /// Map elements to render, in first-seen order
    pub maps: Vec<MapConfig>,
    /// Caches dropped because they are not `fully-distributed`
    pub skipped: Vec<CacheName>,
}

/// Build map configs for every `fully-distributed` cache group
pub fn build_maps(groups: Vec<CacheGroup>) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();

    for group in groups {
        let descriptor = CacheDescriptor::from(group);
        if descriptor.is_fully_distributed() {
            outcome.maps.push(descriptor.to_map_config());
        } else {
            tracing::debug!(
                cache = %descriptor.name,
                cluster_type = descriptor.get(CLUSTER_TYPE_KEY).unwrap_or("<unset>"),
                "Skipping cache that is not fully-distributed"
            );
            outcome.skipped.push(descriptor.name);
        }
    }

    outcome
}
