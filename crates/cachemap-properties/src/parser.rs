//! Line-oriented `key=value` reader
//!
//! Accepts the subset of INI-style syntax used by cache property files:
//! - `key=value` or `key: value`, whichever delimiter comes first wins
//! - `#` and `;` comment lines
//! - blank lines
//!
//! Parsing is strict: a line without a delimiter or a repeated key fails the
//! whole file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::PropertyError;

/// Options controlling how keys are read
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Keep keys exactly as written. When false, keys are lowercased.
    pub preserve_case: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            preserve_case: true,
        }
    }
}

/// A single property as read from the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProperty {
    /// Dotted key, e.g. `cache.nodeOwnerCache.maxItems`
    pub key: String,
    /// Raw value, trimmed
    pub value: String,
    /// 1-based line number in the source
    pub line: usize,
}

/// Read and parse a property file
pub fn read_properties(path: &Path, options: &ParserOptions) -> Result<Vec<RawProperty>, PropertyError> {
    let contents = fs::read_to_string(path).map_err(|source| PropertyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_properties(&contents, options)
}

/// Parse property text into an ordered list of properties
pub fn parse_properties(text: &str, options: &ParserOptions) -> Result<Vec<RawProperty>, PropertyError> {
    let mut properties = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let Some(split_at) = trimmed.find(['=', ':']) else {
            return Err(PropertyError::Malformed {
                line,
                content: trimmed.to_string(),
            });
        };

        let key = trimmed[..split_at].trim();
        let value = trimmed[split_at + 1..].trim();

        if key.is_empty() {
            return Err(PropertyError::Malformed {
                line,
                content: trimmed.to_string(),
            });
        }

        let key = if options.preserve_case {
            key.to_string()
        } else {
            key.to_lowercase()
        };

        if let Some(&first_line) = seen.get(&key) {
            return Err(PropertyError::DuplicateKey {
                key,
                line,
                first_line,
            });
        }
        seen.insert(key.clone(), line);

        properties.push(RawProperty {
            key,
            value: value.to_string(),
            line,
        });
    }

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<RawProperty> {
        parse_properties(text, &ParserOptions::default()).unwrap()
    }

    #[test]
    fn test_basic_pairs() {
        let props = parse("cache.fooCache.maxItems=500\ncache.fooCache.cluster.type=fully-distributed\n");
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].key, "cache.fooCache.maxItems");
        assert_eq!(props[0].value, "500");
        assert_eq!(props[0].line, 1);
        assert_eq!(props[1].value, "fully-distributed");
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let props = parse("# Node caches\n\n; legacy comment\ncache.a.b=1\n   \n");
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].line, 4);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let props = parse("  cache.a.b  =  hello world  ");
        assert_eq!(props[0].key, "cache.a.b");
        assert_eq!(props[0].value, "hello world");
    }

    #[test]
    fn test_colon_delimiter() {
        let props = parse("cache.a.b: 10");
        assert_eq!(props[0].key, "cache.a.b");
        assert_eq!(props[0].value, "10");
    }

    #[test]
    fn test_value_may_contain_delimiters() {
        let props = parse("cache.a.merge-policy=com.hazelcast.Policy=x:y");
        assert_eq!(props[0].value, "com.hazelcast.Policy=x:y");
    }

    #[test]
    fn test_empty_value_allowed() {
        let props = parse("cache.a.b=");
        assert_eq!(props[0].value, "");
    }

    #[test]
    fn test_missing_delimiter_is_malformed() {
        let err = parse_properties("cache.a.b=1\nnot a pair\n", &ParserOptions::default()).unwrap_err();
        match err {
            PropertyError::Malformed { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "not a pair");
            }
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_key_is_malformed() {
        let err = parse_properties("=value", &ParserOptions::default()).unwrap_err();
        assert!(matches!(err, PropertyError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = parse_properties("cache.a.b=1\ncache.a.b=2\n", &ParserOptions::default()).unwrap_err();
        match err {
            PropertyError::DuplicateKey { key, line, first_line } => {
                assert_eq!(key, "cache.a.b");
                assert_eq!(line, 2);
                assert_eq!(first_line, 1);
            }
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_preserve_case_default() {
        let props = parse("cache.nodeOwnerCache.timeToLiveSeconds=0");
        assert_eq!(props[0].key, "cache.nodeOwnerCache.timeToLiveSeconds");
    }

    #[test]
    fn test_lowercase_keys_when_not_preserving_case() {
        let options = ParserOptions { preserve_case: false };
        let props = parse_properties("cache.nodeOwnerCache.maxItems=1", &options).unwrap();
        assert_eq!(props[0].key, "cache.nodeownercache.maxitems");
    }

    #[test]
    fn test_duplicate_detection_after_lowercasing() {
        let options = ParserOptions { preserve_case: false };
        let err = parse_properties("cache.A.b=1\ncache.a.B=2", &options).unwrap_err();
        assert!(matches!(err, PropertyError::DuplicateKey { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.properties");
        let err = read_properties(&path, &ParserOptions::default()).unwrap_err();
        match err {
            PropertyError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("caches.properties");
        fs::write(&path, "cache.a.b=1\r\ncache.a.c=2\r\n").unwrap();
        let props = read_properties(&path, &ParserOptions::default()).unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[1].value, "2");
    }
}
