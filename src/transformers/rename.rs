//! Declarative key-rename tables.
//!
//! A table maps canonical field names to a vendor's spelling for one
//! operation. Renaming is functional: the input map is left untouched and a new
//! map comes back, with unlisted keys passed through unchanged.

use crate::types::JsonMap;

/// Fixed `canonical -> vendor` mapping for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRenameTable {
    entries: &'static [(&'static str, &'static str)],
}

impl KeyRenameTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    pub fn vendor_key(&self, canonical: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == canonical)
            .map(|(_, v)| *v)
    }

    pub fn canonical_key(&self, vendor: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == vendor)
            .map(|(c, _)| *c)
    }

    /// First table entry whose vendor spelling appears in `map`, as `(vendor, canonical)`.
    pub fn find_vendor_spelling(&self, map: &JsonMap) -> Option<(&'static str, &'static str)> {
        self.entries
            .iter()
            .find(|(_, vendor)| map.contains_key(*vendor))
            .map(|(canonical, vendor)| (*vendor, *canonical))
    }

    /// Build a new map with canonical keys replaced by vendor keys.
    pub fn rename(&self, map: &JsonMap) -> JsonMap {
        map.iter()
            .map(|(key, value)| {
                let key = self.vendor_key(key).unwrap_or(key.as_str()).to_string();
                (key, value.clone())
            })
            .collect()
    }
}
