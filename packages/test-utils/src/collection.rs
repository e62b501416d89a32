//! In-memory document collection mock
//!
//! # Lock Poisoning Recovery
//!
//! This implementation uses `unwrap_or_else(|e| e.into_inner())` when acquiring
//! locks to recover from poisoned locks. If a test panics while holding a lock,
//! subsequent tests can still access the store rather than failing with a
//! `PoisonError`. This prevents cascading test failures.

use std::sync::{Arc, RwLock};

/// In-memory stand-in for a document database collection
///
/// Supports the find / find-one / count access patterns the API's storage
/// layer uses, with predicate closures taking the place of query filters.
///
/// # Thread Safety
///
/// `MemoryCollection` uses `Arc<RwLock<...>>` internally, so it can be safely
/// cloned and shared across tasks. All clones share the same underlying
/// documents.
///
/// # Example
///
/// ```rust
/// use commune_test_utils::MemoryCollection;
///
/// let chats: MemoryCollection<&'static str> = MemoryCollection::new();
/// chats.insert("alpha");
/// chats.insert("beta");
///
/// assert_eq!(chats.count(|c| c.starts_with('b')), 1);
/// assert_eq!(chats.find_one(|c| *c == "alpha"), Some("alpha"));
/// ```
pub struct MemoryCollection<T> {
    documents: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone> MemoryCollection<T> {
    /// Create a new, empty collection
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Insert a document
    pub fn insert(&self, document: T) {
        self.documents
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(document);
    }

    /// Return all documents matching the predicate, in insertion order
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.documents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|doc| predicate(doc))
            .cloned()
            .collect()
    }

    /// Return the first document matching the predicate
    pub fn find_one(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.documents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|doc| predicate(doc))
            .cloned()
    }

    /// Count documents matching the predicate
    pub fn count(&self, predicate: impl Fn(&T) -> bool) -> u64 {
        self.documents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|doc| predicate(doc))
            .count() as u64
    }

    /// Remove all documents
    pub fn clear(&self) {
        self.documents
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl<T: Clone> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryCollection<T> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
        }
    }
}
