//! Text rendering of the containers.
//!
//! A tree is printed one node per line, root first, with the left subtree before the right one:
//!
//! ```text
//! 2 -> b
//! ├L: 1 -> a
//! └R: 3 -> c
//! ```

use crate::adaptive_hash_map::AdaptiveHashMap;
use crate::hash_map::HashMap;
use crate::key::Modulo;
use crate::splay_tree::{NodeRef, SplayTree};
use std::fmt::{self, Display, Write};

const EMPTY: &str = "[empty]";
const BUCKET_CHILD_PREFIX: &str = "     ";

fn write_nodes<W, K, V>(
    out: &mut W,
    root: NodeRef<K, V>,
    prefix: String,
    child_prefix: String,
) -> fmt::Result
where
    W: Write,
    K: Display,
    V: Display,
{
    let mut stack = vec![(root, prefix, child_prefix)];
    while let Some((node, prefix, child_prefix)) = stack.pop() {
        let entry = node.entry();
        writeln!(out, "{}{} -> {}", prefix, entry.key, entry.value)?;
        let left = node.left();
        let right = node.right();
        if let Some(right) = right {
            stack.push((
                right,
                format!("{}└R: ", child_prefix),
                format!("{} ", child_prefix),
            ));
        }
        if let Some(left) = left {
            let (branch, continuation) = if right.is_some() {
                ("├L: ", "│")
            } else {
                ("└L: ", " ")
            };
            stack.push((
                left,
                format!("{}{}", child_prefix, branch),
                format!("{}{}", child_prefix, continuation),
            ));
        }
    }
    Ok(())
}

/// Writes `tree`, or `[empty]` if it has no nodes.
///
/// # Examples
///
/// ```
/// use splay_collections::print;
/// use splay_collections::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(1, "a").unwrap();
/// tree.insert(3, "c").unwrap();
/// tree.insert(2, "b").unwrap();
///
/// let mut out = String::new();
/// print::write_tree(&mut out, &tree).unwrap();
/// assert_eq!(out, "2 -> b\n├L: 1 -> a\n└R: 3 -> c\n");
/// ```
pub fn write_tree<W, K, V>(out: &mut W, tree: &SplayTree<K, V>) -> fmt::Result
where
    W: Write,
    K: Display,
    V: Display,
{
    match tree.root() {
        Some(root) => write_nodes(out, root, String::new(), String::new()),
        None => writeln!(out, "{}", EMPTY),
    }
}

/// Writes every bucket of `map` as `<index>: ` followed by the bucket's tree.
pub fn write_adaptive_hash_map<W, K, V>(out: &mut W, map: &AdaptiveHashMap<K, V>) -> fmt::Result
where
    W: Write,
    K: Display,
    V: Display,
{
    for (index, bucket) in map.buckets().iter().enumerate() {
        let prefix = format!("{:>3}: ", index);
        match bucket.root() {
            Some(root) => write_nodes(out, root, prefix, BUCKET_CHILD_PREFIX.to_string())?,
            None => writeln!(out, "{}{}", prefix, EMPTY)?,
        }
    }
    Ok(())
}

/// Writes every slot of `map` as `<index>: (<home slot>) <key> -> <value>`.
pub fn write_hash_map<W, K, V>(out: &mut W, map: &HashMap<K, V>) -> fmt::Result
where
    W: Write,
    K: Display + Modulo,
    V: Display,
{
    for (index, slot) in map.slots().iter().enumerate() {
        write!(out, "{:>3}: ", index)?;
        match slot {
            Some(entry) => writeln!(
                out,
                "({}) {} -> {}",
                map.hash_code(&entry.key),
                entry.key,
                entry.value
            )?,
            None => writeln!(out, "{}", EMPTY)?,
        }
    }
    Ok(())
}
