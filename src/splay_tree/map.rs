use crate::error::{Error, Result};
use crate::splay_tree::node::NodeRef;
use crate::splay_tree::tree::Tree;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;

/// An ordered map implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that
/// recently accessed items are quick to access again. Every successful insertion, lookup and
/// minimum/maximum query "splays" the touched node to the root of the tree, so no balance
/// information is stored and the amortized cost of every operation is `O(log n)`.
///
/// Removal splays the target to the root and then replaces it with its in-order successor (or
/// its only child). The replacement becomes the root without being splayed again.
///
/// Nodes live in an arena owned by the tree and link to their parents through handles, which is
/// what lets the splay operation walk upwards without recursion.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplayTree;
/// use splay_collections::Error;
///
/// let mut tree = SplayTree::new();
/// tree.insert(0, 1).unwrap();
/// tree.insert(3, 4).unwrap();
///
/// assert_eq!(tree.peek(&0), Ok(&1));
/// assert_eq!(tree.peek(&1), Err(Error::NonexistentKey));
/// assert_eq!(tree.insert(3, 5), Err(Error::DuplicateKey));
/// assert_eq!(tree.len(), 2);
///
/// assert_eq!(tree.minimum_key(), Ok(&0));
/// assert_eq!(tree.maximum_key(), Ok(&3));
///
/// assert_eq!(tree.extract(&0), Ok(1));
/// assert_eq!(tree.extract(&0), Err(Error::NonexistentKey));
/// ```
pub struct SplayTree<K, V> {
    tree: Tree<K, V>,
    len: usize,
}

impl<K, V> SplayTree<K, V> {
    /// Constructs a new, empty `SplayTree<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        SplayTree {
            tree: Tree::new(),
            len: 0,
        }
    }

    /// Inserts a key-value pair into the tree and splays the new node to the root. Returns
    /// `Error::DuplicateKey` if the key already exists, in which case the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    /// use splay_collections::Error;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.insert(1, 1), Ok(()));
    /// assert_eq!(tree.insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(tree.peek(&1), Ok(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        K: Ord,
    {
        self.tree
            .insert(key, value)
            .map_err(|_| Error::DuplicateKey)?;
        self.len += 1;
        Ok(())
    }

    /// Returns an immutable reference to the value associated with a particular key and splays
    /// its node to the root. Returns `Error::NonexistentKey` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    /// use splay_collections::Error;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// tree.insert(2, 2).unwrap();
    /// assert_eq!(tree.peek(&1), Ok(&1));
    /// assert_eq!(tree.root().map(|node| *node.key()), Some(1));
    /// assert_eq!(tree.peek(&0), Err(Error::NonexistentKey));
    /// ```
    pub fn peek<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.tree.access(key).ok_or(Error::NonexistentKey)?;
        Ok(&self.tree.entry(handle).value)
    }

    /// Returns a mutable reference to the value associated with a particular key and splays its
    /// node to the root. Returns `Error::NonexistentKey` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// *tree.peek_mut(&1).unwrap() = 2;
    /// assert_eq!(tree.peek(&1), Ok(&2));
    /// ```
    pub fn peek_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.tree.access(key).ok_or(Error::NonexistentKey)?;
        Ok(&mut self.tree.entry_mut(handle).value)
    }

    /// Removes a key from the tree and returns its value. Returns `Error::NonexistentKey` if the
    /// key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    /// use splay_collections::Error;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, "one").unwrap();
    /// assert_eq!(tree.extract(&1), Ok("one"));
    /// assert_eq!(tree.extract(&1), Err(Error::NonexistentKey));
    /// ```
    pub fn extract<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let entry = self.tree.remove(key).ok_or(Error::NonexistentKey)?;
        self.len -= 1;
        Ok(entry.value)
    }

    /// Checks if a key exists in the tree. Note that `contains_key` does not splay the tree in
    /// order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// assert!(!tree.contains_key(&0));
    /// assert!(tree.contains_key(&1));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns the minimum key of the tree after splaying it to the root. Returns
    /// `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(3, 3).unwrap();
    /// tree.insert(1, 1).unwrap();
    /// tree.insert(5, 5).unwrap();
    /// assert_eq!(tree.minimum_key(), Ok(&1));
    /// ```
    pub fn minimum_key(&mut self) -> Result<&K> {
        let handle = self.tree.splay_min().ok_or(Error::EmptyTree)?;
        Ok(&self.tree.entry(handle).key)
    }

    /// Returns the maximum key of the tree after splaying it to the root. Returns
    /// `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(3, 3).unwrap();
    /// tree.insert(5, 5).unwrap();
    /// tree.insert(1, 1).unwrap();
    /// assert_eq!(tree.maximum_key(), Ok(&5));
    /// ```
    pub fn maximum_key(&mut self) -> Result<&K> {
        let handle = self.tree.splay_max().ok_or(Error::EmptyTree)?;
        Ok(&self.tree.entry(handle).key)
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns a read-only cursor over the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.tree.root()
    }
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A tree serializes as the sequence of its entries in ascending key order.
impl<K, V> Serialize for SplayTree<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        let mut result = Ok(());
        self.tree.for_each_in_order(|entry| {
            if result.is_ok() {
                result = seq.serialize_element(entry);
            }
        });
        result?;
        seq.end()
    }
}
