// Translation cache - remembers explanations for exact source fragments

use super::types::ContentChange;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory cache mapping a source fragment, verbatim, to its previously
/// retrieved explanation. One instance per process, owned by the host and
/// handed to the converter; never persisted.
///
/// Invalidation is coarse: any meaningful content change in the observed
/// document discards every entry, since line positions and surrounding
/// context may have shifted.
pub struct TranslationCache {
    entries: Mutex<HashMap<String, String>>,
}

impl TranslationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up the explanation for a fragment. Pure read.
    pub fn lookup(&self, fragment: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .get(fragment)
            .cloned()
    }

    /// Insert or overwrite the explanation for a fragment
    pub fn store(&self, fragment: impl Into<String>, explanation: impl Into<String>) {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .insert(fragment.into(), explanation.into());
    }

    /// Discard every entry
    pub fn invalidate_all(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }

    /// Invalidate everything if the change is meaningful. Returns whether
    /// the cache was cleared.
    pub fn apply_change(&self, change: &ContentChange) -> bool {
        if change.is_meaningful() {
            self.invalidate_all();
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_after_store() {
        let cache = TranslationCache::new();
        cache.store("x = y", "SET X TO Y");
        assert_eq!(cache.lookup("x = y"), Some("SET X TO Y".to_string()));
    }

    #[test]
    fn test_lookup_missing() {
        let cache = TranslationCache::new();
        assert_eq!(cache.lookup("x = y"), None);
    }

    #[test]
    fn test_store_overwrites() {
        let cache = TranslationCache::new();
        cache.store("x = y", "first");
        cache.store("x = y", "second");
        assert_eq!(cache.lookup("x = y"), Some("second".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_verbatim() {
        let cache = TranslationCache::new();
        cache.store("x = y", "explained");
        assert_eq!(cache.lookup("x  =  y"), None);
        assert_eq!(cache.lookup("x = y\n"), None);
    }

    #[test]
    fn test_invalidate_all_clears_everything() {
        let cache = TranslationCache::new();
        cache.store("a", "one");
        cache.store("b", "two");
        cache.invalidate_all();
        assert_eq!(cache.lookup("a"), None);
        assert_eq!(cache.lookup("b"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_whitespace_change_keeps_entries() {
        let cache = TranslationCache::new();
        cache.store("x = 1", "SET X TO 1");

        let cleared = cache.apply_change(&ContentChange::new("  ", 0));
        assert!(!cleared);
        assert_eq!(cache.lookup("x = 1"), Some("SET X TO 1".to_string()));
    }

    #[test]
    fn test_code_change_clears_entries() {
        let cache = TranslationCache::new();
        cache.store("x = 1", "SET X TO 1");

        let cleared = cache.apply_change(&ContentChange::new("y = 2", 0));
        assert!(cleared);
        assert_eq!(cache.lookup("x = 1"), None);
    }

    #[test]
    fn test_deletion_clears_entries() {
        let cache = TranslationCache::new();
        cache.store("x = 1", "SET X TO 1");

        let cleared = cache.apply_change(&ContentChange::new("", 3));
        assert!(cleared);
        assert!(cache.is_empty());
    }
}
