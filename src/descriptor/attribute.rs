//! Attribute classification
//!
//! Maps a cache attribute key to what it contributes to a `<map>` element.

/// Key prefix shared by all near-cache settings
pub const NEAR_CACHE_PREFIX: &str = "nearCache.";

/// Attribute carrying the eviction policy name
pub const EVICTION_POLICY_KEY: &str = "eviction-policy";

/// Attribute supplying the eviction size for the eviction composite
pub const MAX_ITEMS_KEY: &str = "maxItems";

/// Basic attributes emitted as plain text elements
const BASIC_ELEMENTS: &[(&str, &str)] = &[
    ("timeToLiveSeconds", "time-to-live-seconds"),
    ("maxIdleSeconds", "max-idle-seconds"),
    ("backup-count", "backup-count"),
    ("readBackupData", "read-backup-data"),
    ("merge-policy", "merge-policy"),
];

/// Near-cache text settings (sub-key after the prefix -> element)
const NEAR_CACHE_ELEMENTS: &[(&str, &str)] = &[
    ("maxIdleSeconds", "max-idle-seconds"),
    ("timeToLiveSeconds", "time-to-live-seconds"),
];

/// Near-cache sub-key carrying the entry-count eviction size
const NEAR_CACHE_SIZE_KEY: &str = "maxSize";

/// What a single cache attribute contributes to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Plain text child element with the given name
    Basic(&'static str),
    /// Map-level eviction composite
    Eviction,
    /// Setting nested under `<near-cache>`
    NearCache(NearCacheSetting),
    /// Control attribute or side input; emits nothing directly
    Ignored,
}

/// Kinds of near-cache settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NearCacheSetting {
    /// Entry-count eviction size
    Size,
    /// Plain text child element with the given name
    Text(&'static str),
    /// Unrecognized sub-key; opens the near-cache but emits nothing
    Unrecognized,
}

impl Attribute {
    /// Classify an attribute key
    pub fn classify(key: &str) -> Self {
        if key == EVICTION_POLICY_KEY {
            return Attribute::Eviction;
        }

        if let Some(sub_key) = key.strip_prefix(NEAR_CACHE_PREFIX) {
            return Attribute::NearCache(NearCacheSetting::classify(sub_key));
        }

        BASIC_ELEMENTS
            .iter()
            .find(|(input, _)| *input == key)
            .map(|&(_, element)| Attribute::Basic(element))
            .unwrap_or(Attribute::Ignored)
    }
}

impl NearCacheSetting {
    fn classify(sub_key: &str) -> Self {
        if sub_key == NEAR_CACHE_SIZE_KEY {
            return NearCacheSetting::Size;
        }

        NEAR_CACHE_ELEMENTS
            .iter()
            .find(|(input, _)| *input == sub_key)
            .map(|&(_, element)| NearCacheSetting::Text(element))
            .unwrap_or(NearCacheSetting::Unrecognized)
    }
}
