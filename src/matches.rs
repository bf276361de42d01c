//! Match results.
//!
//! [`MatchGroup`] wraps one engine match: the whole matched span plus all
//! capture groups, addressable by position or by name.

use std::collections::HashMap;

/// One match of a pattern against a subject, with its captured groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    whole: String,
    /// Captured group values by position, group 1 first. `None` for groups
    /// that did not participate in the match.
    captures: Vec<Option<String>>,
    /// Name to position for named groups, positions counted like `captures`.
    names: HashMap<String, usize>,
}

impl MatchGroup {
    pub(crate) fn new(
        whole: String,
        captures: Vec<Option<String>>,
        names: HashMap<String, usize>,
    ) -> Self {
        Self {
            whole,
            captures,
            names,
        }
    }

    /// The full text matched by the pattern.
    pub fn whole(&self) -> &str {
        &self.whole
    }

    /// A named capture group's value, if the group exists and participated.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.names
            .get(name)
            .and_then(|&i| self.captures.get(i))
            .and_then(|v| v.as_deref())
    }

    /// A capture group's value by position, `0` being the first group.
    pub fn position(&self, index: usize) -> Option<&str> {
        self.captures.get(index).and_then(|v| v.as_deref())
    }

    /// All captured group values in positional order.
    pub fn captures(&self) -> &[Option<String>] {
        &self.captures
    }

    /// Number of capture groups in the pattern.
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Whether the pattern has no capture groups.
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}
