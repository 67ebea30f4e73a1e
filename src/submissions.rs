//! Session-local cache of recorded enquiries.
//!
//! The site itself has no read view, but the lead flow still marks this
//! cache stale on every successful submit so that any reader added later
//! refetches instead of showing a stale list.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    pub book_requirement: String,
}

#[derive(Default)]
struct CacheInner {
    entries: Option<Vec<Submission>>,
    stale: bool,
}

/// Cheaply clonable shared handle; all clones see the same cache.
#[derive(Clone, Default)]
pub struct SubmissionsCache(Rc<RefCell<CacheInner>>);

impl SubmissionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list with a freshly fetched one.
    pub fn store(&self, entries: Vec<Submission>) {
        let mut inner = self.0.borrow_mut();
        inner.entries = Some(entries);
        inner.stale = false;
    }

    /// Returns the cached list, or `None` when nothing has been fetched
    /// yet or the cache has been invalidated since.
    pub fn get(&self) -> Option<Vec<Submission>> {
        let inner = self.0.borrow();
        if inner.stale {
            return None;
        }
        inner.entries.clone()
    }

    /// Mark the cache stale. The next `get` misses until `store` runs again.
    pub fn invalidate(&self) {
        self.0.borrow_mut().stale = true;
    }
}

// Handle identity, same reasoning as the service handle prop.
impl PartialEq for SubmissionsCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Submission> {
        vec![Submission {
            name: "Rahul".into(),
            phone: "9876543210".into(),
            book_requirement: "NCERT Class 10".into(),
        }]
    }

    #[test]
    fn empty_cache_misses() {
        let cache = SubmissionsCache::new();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn stored_entries_are_returned_until_invalidated() {
        let cache = SubmissionsCache::new();
        cache.store(sample());
        assert_eq!(cache.get(), Some(sample()));

        cache.invalidate();
        assert_eq!(cache.get(), None);

        // A refetch repopulates the cache.
        cache.store(sample());
        assert_eq!(cache.get(), Some(sample()));
    }

    #[test]
    fn clones_share_the_same_cache() {
        let cache = SubmissionsCache::new();
        let other = cache.clone();
        cache.store(sample());
        other.invalidate();
        assert_eq!(cache.get(), None);
    }
}
