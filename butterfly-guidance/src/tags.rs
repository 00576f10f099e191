//! Read-only tag access for road segments
//!
//! Classification only needs string lookups by key, so any map-like
//! container (or the dictionary-encoded arrays coming out of ingestion)
//! can serve as a tag source.

use std::collections::{BTreeMap, HashMap};

use butterfly_common::{Error, Result};

/// Key holding the road type of a way
pub const HIGHWAY_KEY: &str = "highway";

/// String-keyed, string-valued tag lookup for a single way
pub trait TagSource {
    /// Value of `key`, if the way carries it
    fn tag(&self, key: &str) -> Option<&str>;

    /// Check if a key exists
    fn has_tag(&self, key: &str) -> bool {
        self.tag(key).is_some()
    }
}

impl<T: TagSource + ?Sized> TagSource for &T {
    fn tag(&self, key: &str) -> Option<&str> {
        (**self).tag(key)
    }
}

impl TagSource for HashMap<String, String> {
    fn tag(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl TagSource for HashMap<&str, &str> {
    fn tag(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

impl TagSource for BTreeMap<String, String> {
    fn tag(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl TagSource for [(&str, &str)] {
    fn tag(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

impl<const N: usize> TagSource for [(&str, &str); N] {
    fn tag(&self, key: &str) -> Option<&str> {
        self.as_slice().tag(key)
    }
}

/// Tags of one way in dictionary-encoded form
pub struct TagLookup<'a> {
    keys: &'a [u32],
    vals: &'a [u32],
    val_dict: &'a HashMap<u32, String>,
    /// Reverse map: key string → key ID for O(1) lookup
    rev_key: HashMap<&'a str, u32>,
}

impl<'a> TagLookup<'a> {
    pub fn new(
        keys: &'a [u32],
        vals: &'a [u32],
        key_dict: &'a HashMap<u32, String>,
        val_dict: &'a HashMap<u32, String>,
    ) -> Self {
        let rev_key = key_dict.iter().map(|(id, s)| (s.as_str(), *id)).collect();
        Self {
            keys,
            vals,
            val_dict,
            rev_key,
        }
    }

    /// Get a tag value ID by key ID
    pub fn get_by_id(&self, key_id: u32) -> Option<u32> {
        self.keys
            .iter()
            .position(|k| *k == key_id)
            .and_then(|i| self.vals.get(i).copied())
    }
}

impl TagSource for TagLookup<'_> {
    fn tag(&self, key: &str) -> Option<&str> {
        let key_id = *self.rev_key.get(key)?;
        let val_id = self.get_by_id(key_id)?;
        self.val_dict.get(&val_id).map(String::as_str)
    }
}

/// Parse a `key=value` pair as given on the command line
///
/// The value may itself contain `=`; only the first one splits. Only the key
/// is trimmed: the value is kept verbatim so it classifies exactly as the
/// same tag would in map data.
pub fn parse_tag_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidTag(pair.to_string())),
    }
}

/// Parse a comma-separated list of `key=value` pairs into a tag map
pub fn parse_tag_list(list: &str) -> Result<HashMap<String, String>> {
    list.split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(parse_tag_pair)
        .collect()
}
