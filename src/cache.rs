//! Compiled query cache.
//!
//! Compiling the same query twice wastes a full parse and build, so
//! [`QueryCache`] keeps compiled queries behind their normalized text.
//! Entries are write-once: the first compilation wins and every later hit
//! hands out the same shared instance. The cache is unbounded; callers
//! feeding it unbounded distinct queries should scope the cache accordingly.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::SrlResult;
use crate::parser;
use crate::srl::Srl;

/// Thread-safe cache of compiled queries, keyed by normalized query text.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<String, Arc<Srl>>>,
}

impl QueryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a query, reusing the cached instance when the normalized text
    /// was seen before. A poisoned lock degrades to uncached compilation
    /// instead of propagating the panic.
    pub fn compile(&self, query: &str) -> SrlResult<Arc<Srl>> {
        let key = parser::normalize(query);

        if let Ok(entries) = self.entries.read() {
            if let Some(hit) = entries.get(&key) {
                return Ok(Arc::clone(hit));
            }
        }

        // Built outside the lock; a concurrent first writer wins and this
        // build is discarded.
        let built = Arc::new(Srl::new(&key)?);

        match self.entries.write() {
            Ok(mut entries) => Ok(Arc::clone(entries.entry(key).or_insert(built))),
            Err(_) => Ok(built),
        }
    }

    /// Whether a query is already cached.
    pub fn contains(&self, query: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(&parser::normalize(query)))
            .unwrap_or(false)
    }

    /// Number of cached queries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_returns_same_instance() {
        let cache = QueryCache::new();
        let first = cache.compile("letter once or more").unwrap();
        let second = cache.compile("letter once or more").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_normalization_shares_entries() {
        let cache = QueryCache::new();
        let plain = cache.compile("digit twice").unwrap();
        let decorated = cache.compile("  digit twice;  ").unwrap();
        assert!(Arc::ptr_eq(&plain, &decorated));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("digit twice;"));
    }

    #[test]
    fn test_poisoned_lock_degrades_to_uncached() {
        let cache = QueryCache::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = cache.entries.write().unwrap();
            panic!("poison the lock");
        }));
        assert!(cache.entries.read().is_err());

        let compiled = cache.compile("digit twice").unwrap();
        assert_eq!(compiled.pattern(), "[0-9]{2}");
        assert_eq!(cache.len(), 0);
        assert!(!cache.contains("digit twice"));
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = QueryCache::new();
        assert!(cache.compile("once or more").is_err());
        assert!(cache.is_empty());
    }
}
