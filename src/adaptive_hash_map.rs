//! Hash table with a fixed number of buckets where every bucket is a splay tree.

use crate::error::Result;
use crate::key::Modulo;
use crate::splay_tree::SplayTree;
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;

/// A hash table whose collision chains are splay trees.
///
/// A key lives in bucket `key.modulo(bucket_count)`. The number of buckets is chosen at
/// construction and never changes, so buckets grow without bound. Because every bucket is a splay
/// tree, keys that are accessed often move toward the root of their bucket and subsequent
/// accesses to them get cheaper.
///
/// # Examples
///
/// ```
/// use splay_collections::adaptive_hash_map::AdaptiveHashMap;
/// use splay_collections::Error;
///
/// let mut map = AdaptiveHashMap::new(4);
/// map.insert(1, "one").unwrap();
/// map.insert(5, "five").unwrap();
///
/// assert_eq!(map.hash_code(&5), 1);
/// assert_eq!(map.buckets()[1].len(), 2);
/// assert_eq!(map.peek(&5), Ok(&"five"));
/// assert_eq!(map.insert(1, "uno"), Err(Error::DuplicateKey));
///
/// assert_eq!(map.extract(&1), Ok("one"));
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.bucket_count(), 4);
/// ```
pub struct AdaptiveHashMap<K, V> {
    buckets: Vec<SplayTree<K, V>>,
    len: usize,
}

impl<K, V> AdaptiveHashMap<K, V> {
    /// Constructs a new, empty `AdaptiveHashMap<K, V>` with `bucket_count` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::adaptive_hash_map::AdaptiveHashMap;
    ///
    /// let map: AdaptiveHashMap<u32, u32> = AdaptiveHashMap::new(16);
    /// assert_eq!(map.bucket_count(), 16);
    /// ```
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "Error: bucket count must be positive.");
        debug!("creating adaptive hash map with {} buckets", bucket_count);
        AdaptiveHashMap {
            buckets: (0..bucket_count).map(|_| SplayTree::new()).collect(),
            len: 0,
        }
    }

    /// Returns the index of the bucket that holds `key`.
    pub fn hash_code<Q>(&self, key: &Q) -> usize
    where
        Q: Modulo + ?Sized,
    {
        key.modulo(self.buckets.len())
    }

    /// Inserts a key-value pair into its bucket. Returns `Error::DuplicateKey` if the key already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::adaptive_hash_map::AdaptiveHashMap;
    /// use splay_collections::Error;
    ///
    /// let mut map = AdaptiveHashMap::new(2);
    /// assert_eq!(map.insert(1, 1), Ok(()));
    /// assert_eq!(map.insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        K: Ord + Modulo,
    {
        let code = self.hash_code(&key);
        self.buckets[code].insert(key, value)?;
        self.len += 1;
        Ok(())
    }

    /// Returns an immutable reference to the value associated with a particular key, splaying it
    /// to the root of its bucket. Returns `Error::NonexistentKey` if the key does not exist.
    pub fn peek<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + Modulo + ?Sized,
    {
        let code = self.hash_code(key);
        self.buckets[code].peek(key)
    }

    /// Returns a mutable reference to the value associated with a particular key, splaying it to
    /// the root of its bucket. Returns `Error::NonexistentKey` if the key does not exist.
    pub fn peek_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + Modulo + ?Sized,
    {
        let code = self.hash_code(key);
        self.buckets[code].peek_mut(key)
    }

    /// Removes a key from the map and returns its value. Returns `Error::NonexistentKey` if the
    /// key does not exist.
    pub fn extract<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Ord + Modulo + ?Sized,
    {
        let code = self.hash_code(key);
        let value = self.buckets[code].extract(key)?;
        self.len -= 1;
        Ok(value)
    }

    /// Checks if a key exists in the map without splaying its bucket.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + Modulo + ?Sized,
    {
        self.buckets[self.hash_code(key)].contains_key(key)
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets, which is fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the buckets of the map in index order.
    pub fn buckets(&self) -> &[SplayTree<K, V>] {
        &self.buckets
    }
}

/// Constructs a map with a single bucket, which behaves like a plain `SplayTree`.
impl<K, V> Default for AdaptiveHashMap<K, V> {
    fn default() -> Self {
        Self::new(1)
    }
}

/// A map serializes as the sequence of its buckets.
impl<K, V> Serialize for AdaptiveHashMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.buckets.serialize(serializer)
    }
}
