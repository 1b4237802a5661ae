//! Open addressing hash table with linear probing.

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::key::Modulo;
use std::borrow::Borrow;
use std::mem;

/// A hash table that stores at most one entry per slot and resolves collisions with linear
/// probing.
///
/// A key's home slot is `key.modulo(bucket_count)`. Insertion probes forward from the home slot
/// (wrapping around) to the first empty slot; if the probe comes back to the home slot the table
/// doubles its bucket count and tries again. Extraction simply empties the slot, which can break
/// a probe chain, so lookups scan every slot instead of following the chain.
///
/// # Examples
///
/// ```
/// use splay_collections::hash_map::HashMap;
///
/// let mut map = HashMap::new(2);
/// map.insert(0, "zero").unwrap();
/// map.insert(2, "two").unwrap();
/// assert_eq!(map.bucket_count(), 2);
///
/// // Both slots are taken, so the next insertion doubles the table.
/// map.insert(4, "four").unwrap();
/// assert_eq!(map.bucket_count(), 4);
/// assert_eq!(map.peek(&2), Ok(&"two"));
/// assert_eq!(map.extract(&0), Ok("zero"));
/// assert_eq!(map.len(), 2);
/// ```
pub struct HashMap<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    len: usize,
}

impl<K, V> HashMap<K, V> {
    /// Constructs a new, empty `HashMap<K, V>` with `bucket_count` slots.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "Error: bucket count must be positive.");
        HashMap {
            slots: Self::empty_slots(bucket_count),
            len: 0,
        }
    }

    fn empty_slots(bucket_count: usize) -> Vec<Option<Entry<K, V>>> {
        (0..bucket_count).map(|_| None).collect()
    }

    /// Returns the home slot of `key`.
    pub fn hash_code<Q>(&self, key: &Q) -> usize
    where
        Q: Modulo + ?Sized,
    {
        key.modulo(self.slots.len())
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.slots.iter().position(|slot| match slot {
            Some(entry) => entry.key.borrow() == key,
            None => false,
        })
    }

    /// Returns the first empty slot at or after the home slot of `key`, or `None` if the probe
    /// wraps around to the home slot.
    fn probe(&self, key: &K) -> Option<usize>
    where
        K: Modulo,
    {
        let start = self.hash_code(key);
        let mut index = start;
        while self.slots[index].is_some() {
            index = (index + 1) % self.slots.len();
            if index == start {
                return None;
            }
        }
        Some(index)
    }

    /// Changes the number of slots to `bucket_count` and re-inserts every entry. Requests smaller
    /// than the current number of entries are ignored. A request for zero slots is ignored too,
    /// even on an empty map, since a table without slots has no home slot to reduce keys into.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::hash_map::HashMap;
    ///
    /// let mut map = HashMap::new(1);
    /// map.insert(3, 3).unwrap();
    /// map.resize(5);
    /// assert_eq!(map.bucket_count(), 5);
    /// assert!(map.slots()[3].is_some());
    ///
    /// map.resize(0);
    /// assert_eq!(map.bucket_count(), 5);
    /// ```
    pub fn resize(&mut self, bucket_count: usize)
    where
        K: Modulo,
    {
        if bucket_count < self.len || bucket_count == 0 {
            debug!(
                "ignoring resize to {} slots with {} entries",
                bucket_count, self.len
            );
            return;
        }
        debug!("resizing from {} to {} slots", self.slots.len(), bucket_count);
        let old_slots = mem::replace(&mut self.slots, Self::empty_slots(bucket_count));
        for entry in old_slots.into_iter().flatten() {
            let index = self
                .probe(&entry.key)
                .expect("Expected an empty slot after resizing.");
            self.slots[index] = Some(entry);
        }
    }

    /// Inserts a key-value pair into the map. Returns `Error::DuplicateKey` if the key already
    /// exists.
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        K: Eq + Modulo,
    {
        if self.position(&key).is_some() {
            return Err(Error::DuplicateKey);
        }
        let index = loop {
            match self.probe(&key) {
                Some(index) => break index,
                None => {
                    let bucket_count = self.slots.len() * 2;
                    self.resize(bucket_count);
                },
            }
        };
        self.slots[index] = Some(Entry::new(key, value));
        self.len += 1;
        Ok(())
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `Error::NonexistentKey` if the key does not exist.
    pub fn peek<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.position(key).ok_or(Error::NonexistentKey)?;
        match &self.slots[index] {
            Some(entry) => Ok(&entry.value),
            None => Err(Error::NonexistentKey),
        }
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns
    /// `Error::NonexistentKey` if the key does not exist.
    pub fn peek_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.position(key).ok_or(Error::NonexistentKey)?;
        match &mut self.slots[index] {
            Some(entry) => Ok(&mut entry.value),
            None => Err(Error::NonexistentKey),
        }
    }

    /// Removes a key from the map and returns its value. Returns `Error::NonexistentKey` if the
    /// key does not exist.
    pub fn extract<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.position(key).ok_or(Error::NonexistentKey)?;
        let entry = self.slots[index].take().ok_or(Error::NonexistentKey)?;
        self.len -= 1;
        Ok(entry.value)
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of slots.
    pub fn bucket_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slots of the map in index order.
    pub fn slots(&self) -> &[Option<Entry<K, V>>] {
        &self.slots
    }
}

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::HashMap;
    use crate::error::Error;

    fn occupied(map: &HashMap<u32, u32>) -> Vec<Option<u32>> {
        map.slots()
            .iter()
            .map(|slot| slot.as_ref().map(|entry| entry.key))
            .collect()
    }

    #[test]
    #[should_panic]
    fn test_zero_buckets() {
        let _map: HashMap<u32, u32> = HashMap::new(0);
    }

    #[test]
    fn test_linear_probing() {
        let mut map = HashMap::new(4);
        map.insert(1, 1).unwrap();
        map.insert(5, 5).unwrap();
        map.insert(3, 3).unwrap();
        map.insert(7, 7).unwrap();
        assert_eq!(occupied(&map), vec![Some(7), Some(1), Some(5), Some(3)]);
        assert_eq!(map.bucket_count(), 4);
    }

    #[test]
    fn test_insert_grows_when_full() {
        let mut map = HashMap::default();
        map.insert(0, 0).unwrap();
        map.insert(1, 1).unwrap();
        assert_eq!(map.bucket_count(), 2);
        map.insert(2, 2).unwrap();
        assert_eq!(map.bucket_count(), 4);
        assert_eq!(occupied(&map), vec![Some(0), Some(1), Some(2), None]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_resize_rehashes_in_slot_order() {
        let mut map = HashMap::new(4);
        map.insert(4, 4).unwrap();
        map.insert(2, 2).unwrap();
        map.insert(6, 6).unwrap();
        assert_eq!(occupied(&map), vec![Some(4), None, Some(2), Some(6)]);
        map.resize(3);
        assert_eq!(occupied(&map), vec![Some(6), Some(4), Some(2)]);
    }

    #[test]
    fn test_resize_ignores_small_requests() {
        let mut map = HashMap::new(4);
        map.insert(1, 1).unwrap();
        map.insert(2, 2).unwrap();
        map.resize(1);
        assert_eq!(map.bucket_count(), 4);
        map.resize(2);
        assert_eq!(map.bucket_count(), 2);
    }

    #[test]
    fn test_resize_to_zero_is_ignored() {
        let mut map: HashMap<u32, u32> = HashMap::new(3);
        map.resize(0);
        assert_eq!(map.bucket_count(), 3);
        map.insert(7, 7).unwrap();
        map.resize(0);
        assert_eq!(map.bucket_count(), 3);
        assert_eq!(map.hash_code(&7), 1);
        assert_eq!(map.peek(&7), Ok(&7));
    }

    #[test]
    fn test_extract_leaves_hole() {
        let mut map = HashMap::new(4);
        map.insert(1, 1).unwrap();
        map.insert(5, 5).unwrap();
        assert_eq!(map.extract(&1), Ok(1));
        assert_eq!(occupied(&map), vec![None, None, Some(5), None]);
        assert_eq!(map.peek(&5), Ok(&5));
        assert_eq!(map.extract(&1), Err(Error::NonexistentKey));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_duplicate_key() {
        let mut map = HashMap::new(4);
        map.insert(1, 1).unwrap();
        assert_eq!(map.insert(1, 2), Err(Error::DuplicateKey));
        *map.peek_mut(&1).unwrap() = 3;
        assert_eq!(map.peek(&1), Ok(&3));
        assert_eq!(map.len(), 1);
    }
}
