use crate::arena::{Handle, TypedArena};
use crate::entry::Entry;
use crate::splay_tree::node::{Node, NodeRef};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Outcome of a descent that looks for a key.
enum Search {
    Found(Handle),
    /// The key is absent. Holds the last node visited and the ordering of the key relative to it.
    Vacant(Option<(Handle, Ordering)>),
}

/// Linked nodes stored in an arena. Rotations and the splay operation live here; the public
/// container on top keeps the element count.
pub struct Tree<K, V> {
    arena: TypedArena<Node<K, V>>,
    root: Option<Handle>,
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Tree {
            arena: TypedArena::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(|handle| NodeRef::new(&self.arena, handle))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn entry(&self, handle: Handle) -> &Entry<K, V> {
        &self.arena[handle].entry
    }

    pub fn entry_mut(&mut self, handle: Handle) -> &mut Entry<K, V> {
        &mut self.arena[handle].entry
    }

    fn is_left_child(&self, node: Handle, parent: Handle) -> bool {
        self.arena[parent].left == Some(node)
    }

    /// Points whatever linked to `old` (its parent, or the root slot) at `new`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            Some(parent) => {
                if self.is_left_child(old, parent) {
                    self.arena[parent].left = new;
                } else {
                    self.arena[parent].right = new;
                }
            },
            None => self.root = new,
        }
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }

    fn rotate_left(&mut self, node: Handle) {
        let pivot = self.arena[node]
            .right
            .expect("Expected right child node to be `Some`.");
        let parent = self.arena[node].parent;
        self.replace_child(parent, node, Some(pivot));

        let inner = self.arena[pivot].left;
        self.arena[node].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }

        self.arena[pivot].left = Some(node);
        self.arena[node].parent = Some(pivot);
    }

    fn rotate_right(&mut self, node: Handle) {
        let pivot = self.arena[node]
            .left
            .expect("Expected left child node to be `Some`.");
        let parent = self.arena[node].parent;
        self.replace_child(parent, node, Some(pivot));

        let inner = self.arena[pivot].right;
        self.arena[node].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }

        self.arena[pivot].right = Some(node);
        self.arena[node].parent = Some(pivot);
    }

    /// Rotates `node` up until it becomes the root.
    pub fn splay(&mut self, node: Handle) {
        while let Some(parent) = self.arena[node].parent {
            let node_is_left = self.is_left_child(node, parent);
            match self.arena[parent].parent {
                // zig
                None => {
                    if node_is_left {
                        self.rotate_right(parent);
                    } else {
                        self.rotate_left(parent);
                    }
                },
                Some(grandparent) => {
                    let parent_is_left = self.is_left_child(parent, grandparent);
                    match (parent_is_left, node_is_left) {
                        // zig-zig
                        (true, true) => {
                            self.rotate_right(grandparent);
                            self.rotate_right(parent);
                        },
                        (false, false) => {
                            self.rotate_left(grandparent);
                            self.rotate_left(parent);
                        },
                        // zig-zag
                        (true, false) => {
                            self.rotate_left(parent);
                            self.rotate_right(grandparent);
                        },
                        (false, true) => {
                            self.rotate_right(parent);
                            self.rotate_left(grandparent);
                        },
                    }
                },
            }
        }
        debug_assert_eq!(self.root, Some(node));
    }

    fn search<Q>(&self, key: &Q) -> Search
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut last = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            let ordering = key.cmp(node.entry.key.borrow());
            curr = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Search::Found(handle),
            };
            last = Some((handle, ordering));
        }
        Search::Vacant(last)
    }

    /// Returns the node holding `key` without changing the shape of the tree.
    pub fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(handle) => Some(handle),
            Search::Vacant(_) => None,
        }
    }

    /// Returns the node holding `key` after splaying it to the root.
    pub fn access<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.find(key)?;
        if self.root != Some(handle) {
            self.splay(handle);
        }
        Some(handle)
    }

    /// Attaches a new leaf for `key` and splays it to the root. Hands the pair back if the key is
    /// already present, in which case the tree is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> Result<Handle, (K, V)>
    where
        K: Ord,
    {
        let (parent, ordering) = match self.search(&key) {
            Search::Found(_) => return Err((key, value)),
            Search::Vacant(None) => {
                let handle = self.arena.allocate(Node::new(key, value, None));
                self.root = Some(handle);
                return Ok(handle);
            },
            Search::Vacant(Some(last)) => last,
        };

        let handle = self.arena.allocate(Node::new(key, value, Some(parent)));
        if ordering == Ordering::Less {
            self.arena[parent].left = Some(handle);
        } else {
            self.arena[parent].right = Some(handle);
        }
        self.splay(handle);
        Ok(handle)
    }

    /// Unlinks the node holding `key` and returns its entry.
    ///
    /// The target is splayed to the root first. It is then replaced by its only child, or by its
    /// in-order successor when it has two children. The replacement becomes the root directly; no
    /// further splay happens.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let target = self.find(key)?;
        if self.root == Some(target) && self.arena[target].is_leaf() {
            self.root = None;
            return self.arena.free(target).map(|node| node.entry);
        }
        if self.root != Some(target) {
            self.splay(target);
        }

        let (left, right) = {
            let node = &self.arena[target];
            (node.left, node.right)
        };
        match (left, right) {
            (left, None) => self.replace_child(None, target, left),
            (None, right) => self.replace_child(None, target, right),
            (Some(left), Some(right)) => {
                let mut successor = right;
                while let Some(next) = self.arena[successor].left {
                    successor = next;
                }

                if successor != right {
                    let successor_parent = self.arena[successor].parent;
                    let successor_right = self.arena[successor].right;
                    if let Some(successor_parent) = successor_parent {
                        self.arena[successor_parent].left = successor_right;
                    }
                    if let Some(successor_right) = successor_right {
                        self.arena[successor_right].parent = successor_parent;
                    }
                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                }

                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
                self.arena[successor].parent = None;
                self.root = Some(successor);
            },
        }

        self.arena.free(target).map(|node| node.entry)
    }

    /// Splays the leftmost node to the root and returns it.
    pub fn splay_min(&mut self) -> Option<Handle> {
        let mut curr = self.root?;
        while let Some(left) = self.arena[curr].left {
            curr = left;
        }
        self.splay(curr);
        Some(curr)
    }

    /// Splays the rightmost node to the root and returns it.
    pub fn splay_max(&mut self) -> Option<Handle> {
        let mut curr = self.root?;
        while let Some(right) = self.arena[curr].right {
            curr = right;
        }
        self.splay(curr);
        Some(curr)
    }

    /// Visits every entry in ascending key order.
    pub fn for_each_in_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Entry<K, V>),
    {
        let mut stack = Vec::new();
        let mut curr = self.root;
        loop {
            while let Some(handle) = curr {
                stack.push(handle);
                curr = self.arena[handle].left;
            }
            match stack.pop() {
                Some(handle) => {
                    let node = &self.arena[handle];
                    f(&node.entry);
                    curr = node.right;
                },
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;

    fn shape(tree: &Tree<u32, ()>) -> Vec<(u32, Option<u32>, Option<u32>)> {
        let mut nodes = Vec::new();
        let mut stack: Vec<_> = tree.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            nodes.push((
                *node.key(),
                node.left().map(|left| *left.key()),
                node.right().map(|right| *right.key()),
            ));
            stack.extend(node.right());
            stack.extend(node.left());
        }
        nodes
    }

    fn build(keys: &[u32]) -> Tree<u32, ()> {
        let mut tree = Tree::new();
        for &key in keys {
            assert!(tree.insert(key, ()).is_ok());
        }
        tree
    }

    #[test]
    fn test_insert_ascending_builds_left_path() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(
            shape(&tree),
            vec![(3, Some(2), None), (2, Some(1), None), (1, None, None)],
        );
    }

    #[test]
    fn test_zig_zag() {
        let mut tree = build(&[3, 1, 2]);
        assert_eq!(
            shape(&tree),
            vec![(2, Some(1), Some(3)), (1, None, None), (3, None, None)],
        );
        let handle = tree.access(&1).unwrap();
        assert_eq!(tree.entry(handle).key, 1);
        assert_eq!(
            shape(&tree),
            vec![(1, None, Some(2)), (2, None, Some(3)), (3, None, None)],
        );
    }

    #[test]
    fn test_zig_zig() {
        let mut tree = build(&[1, 2, 3, 4]);
        tree.access(&1);
        assert_eq!(
            shape(&tree),
            vec![
                (1, None, Some(4)),
                (4, Some(2), None),
                (2, None, Some(3)),
                (3, None, None),
            ],
        );
    }

    #[test]
    fn test_remove_root_promotes_successor() {
        let mut tree = build(&[1, 3, 2, 5, 7, 6, 8, 4]);
        assert_eq!(tree.root().map(|node| *node.key()), Some(4));

        assert_eq!(tree.remove(&4).map(|entry| entry.key), Some(4));
        assert_eq!(shape(&tree)[0].0, 5);
        assert_eq!(tree.root().unwrap().parent(), None);

        let mut keys = Vec::new();
        tree.for_each_in_order(|entry| keys.push(entry.key));
        assert_eq!(keys, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_remove_reattaches_successor_right_subtree() {
        let mut tree = build(&[5, 14, 20, 12]);
        tree.access(&20);
        assert!(tree.insert(10, ()).is_ok());
        assert_eq!(
            shape(&tree),
            vec![
                (10, Some(5), Some(20)),
                (5, None, None),
                (20, Some(12), None),
                (12, None, Some(14)),
                (14, None, None),
            ],
        );

        assert_eq!(tree.remove(&10).map(|entry| entry.key), Some(10));
        assert_eq!(
            shape(&tree),
            vec![
                (12, Some(5), Some(20)),
                (5, None, None),
                (20, Some(14), None),
                (14, None, None),
            ],
        );

        let root = tree.root().unwrap();
        assert_eq!(root.parent(), None);
        let right = root.right().unwrap();
        assert_eq!(right.parent(), Some(root));
        assert_eq!(root.left().unwrap().parent(), Some(root));
        assert_eq!(right.left().unwrap().parent(), Some(right));
    }

    #[test]
    fn test_remove_last_node() {
        let mut tree = build(&[1]);
        assert!(tree.remove(&1).is_some());
        assert!(tree.is_empty());
        assert!(tree.remove(&1).is_none());
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = build(&[2, 1]);
        assert_eq!(tree.insert(2, ()).err(), Some((2, ())));
        assert_eq!(shape(&tree), vec![(1, None, Some(2)), (2, None, None)]);
    }
}
