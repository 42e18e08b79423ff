//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for the DP cache.
///
/// # Contract
///
/// - `get` returns `None` until a value is inserted for that index
/// - `insert` on an index that already holds a value keeps the first value
pub trait Backend<I, K> {
    /// Returns a copy of the cached value, if any.
    fn get(&self, index: &I) -> Option<K>;

    /// Stores the value for the given index.
    fn insert(&mut self, index: I, value: K);

    /// Number of cached values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Vec-based backend for usize indices.
///
/// Efficient for dense, sequential integer indices starting from 0. The Vec
/// grows to accommodate new indices.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new VecBackend with room for `capacity` indices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<K> {
        self.data.get(*index).and_then(Clone::clone)
    }

    fn insert(&mut self, index: usize, value: K) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index].get_or_insert(value);
    }

    fn len(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Suitable for sparse indices or composite index types such as tuples.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K: Clone> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<K> {
        self.data.get(index).cloned()
    }

    fn insert(&mut self, index: I, value: K) {
        self.data.entry(index).or_insert(value);
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
