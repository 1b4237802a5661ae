use crate::arena::{Handle, TypedArena};
use crate::entry::Entry;
use std::fmt;

pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Node {
            entry: Entry { key, value },
            parent,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// An immutable cursor over a node of a `SplayTree<K, V>`.
///
/// A `NodeRef` borrows the whole tree, so the tree cannot be modified while the cursor is alive.
/// It is meant for walking the shape of the tree, for example to print it.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(2, "two").unwrap();
/// tree.insert(1, "one").unwrap();
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.key(), &1);
/// assert_eq!(root.right().map(|node| *node.value()), Some("two"));
/// assert!(root.left().is_none());
/// ```
pub struct NodeRef<'a, K, V> {
    arena: &'a TypedArena<Node<K, V>>,
    handle: Handle,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(arena: &'a TypedArena<Node<K, V>>, handle: Handle) -> Self {
        NodeRef { arena, handle }
    }

    fn node(&self) -> &'a Node<K, V> {
        &self.arena[self.handle]
    }

    fn follow(&self, link: Option<Handle>) -> Option<NodeRef<'a, K, V>> {
        link.map(|handle| NodeRef::new(self.arena, handle))
    }

    pub fn key(&self) -> &'a K {
        &self.node().entry.key
    }

    pub fn value(&self) -> &'a V {
        &self.node().entry.value
    }

    pub fn entry(&self) -> &'a Entry<K, V> {
        &self.node().entry
    }

    pub fn left(&self) -> Option<NodeRef<'a, K, V>> {
        self.follow(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K, V>> {
        self.follow(self.node().right)
    }

    /// Returns the parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K, V>> {
        self.follow(self.node().parent)
    }
}

impl<'a, K, V> Clone for NodeRef<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for NodeRef<'a, K, V> {}

/// Two cursors are equal when they point at the same node of the same tree.
impl<'a, K, V> PartialEq for NodeRef<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.handle == other.handle
    }
}

impl<'a, K, V> Eq for NodeRef<'a, K, V> {}

impl<'a, K, V> fmt::Debug for NodeRef<'a, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .finish()
    }
}
