use std::collections::hash_map::{self, HashMap};

/// The value a flag was given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// The flag was given without a value: `--verbose` followed by another flag or by nothing,
    /// or `--verbose=`.
    Present,

    /// `--name value`
    Separate(String),

    /// `--name=value`
    Attached {
        /// Everything after the first `=`, verbatim
        raw: String,

        /// Boolean reading of `raw`: `false` for `0`, `n` and `no` (case-sensitive), `true` for
        /// anything else. Only consulted when binding boolean fields.
        switch: bool,
    },
}

impl FlagValue {
    pub(crate) fn attached(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Present;
        }

        Self::Attached {
            raw: raw.to_owned(),
            switch: !matches!(raw, "0" | "n" | "no"),
        }
    }

    /// The raw text, or `None` for [`Present`](FlagValue::Present).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present => None,
            Self::Separate(raw) | Self::Attached { raw, .. } => Some(raw),
        }
    }

    /// `true` if the flag was given without a value.
    #[inline]
    pub fn is_present_only(&self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Parsed flags, keyed by name with the leading dashes stripped.
///
/// Names are case-sensitive. Later occurrences of a flag replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagMap {
    entries: HashMap<String, FlagValue>,
}

impl FlagMap {
    /// Look up a flag by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.entries.get(name)
    }

    /// Whether the flag was given at all.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the flags in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.entries.iter().map(move |(k, v)| (k.as_str(), v))
    }

    /// Try `name`, then `short` if given.
    pub(crate) fn resolve(&self, name: &str, short: Option<&str>) -> Option<&FlagValue> {
        self.get(name).or_else(move || short.and_then(|s| self.get(s)))
    }

    pub(crate) fn insert(&mut self, name: String, value: FlagValue) {
        self.entries.insert(name, value);
    }
}

impl<'a> IntoIterator for &'a FlagMap {
    type Item = (&'a String, &'a FlagValue);
    type IntoIter = hash_map::Iter<'a, String, FlagValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
