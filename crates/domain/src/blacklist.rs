use std::collections::HashSet;

/// Set of hostnames rejected by the lookup service.
///
/// Built once from newline-delimited text and never mutated afterwards.
/// Request handlers share it behind an `Arc` and only ever read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Splits `text` on `'\n'` and inserts every token.
    ///
    /// Tokens are kept verbatim: no trimming, no case folding, and the empty
    /// token produced by a trailing newline is inserted like any other.
    pub fn from_text(text: &str) -> Self {
        Self {
            entries: text.split('\n').map(str::to_owned).collect(),
        }
    }

    pub fn contains(&self, host: &str) -> bool {
        self.entries.contains(host)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries a request key can actually hit.
    ///
    /// A valid lookup key is never empty, so the `""` entry left behind by a
    /// trailing newline does not count.
    pub fn matchable_len(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_empty()).count()
    }
}
