use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Rendered-page cache keyed by request path.
///
/// Invalidation is idempotent: removing an absent path is a no-op, so
/// concurrent webhook deliveries for the same document interleave freely.
#[derive(Clone, Default)]
pub struct PageCache {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl PageCache {
    pub fn get(&self, path: &str) -> Option<String> {
        self.inner.lock().ok()?.get(path).cloned()
    }

    pub fn insert(&self, path: impl Into<String>, html: impl Into<String>) {
        if let Ok(mut map) = self.inner.lock() {
            map.insert(path.into(), html.into());
        }
    }

    /// Returns true when the path was cached.
    pub fn invalidate(&self, path: &str) -> bool {
        self.inner
            .lock()
            .map(|mut map| map.remove(path).is_some())
            .unwrap_or(false)
    }

    /// Drops every cached page. Returns the number of entries removed.
    pub fn invalidate_all(&self) -> usize {
        self.inner
            .lock()
            .map(|mut map| {
                let count = map.len();
                map.clear();
                count
            })
            .unwrap_or(0)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.inner
            .lock()
            .map(|map| map.contains_key(path))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_is_idempotent() {
        let cache = PageCache::default();
        cache.insert("/", "<html>home</html>");

        assert!(cache.invalidate("/"));
        assert!(!cache.invalidate("/"));
        assert!(!cache.contains("/"));
    }

    #[test]
    fn invalidate_all_clears_every_path() {
        let cache = PageCache::default();
        cache.insert("/", "home");
        cache.insert("/about", "about");

        assert_eq!(cache.invalidate_all(), 2);
        assert!(cache.is_empty());
        assert_eq!(cache.invalidate_all(), 0);
    }
}
