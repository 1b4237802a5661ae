//! Self-adjusting collections built around a splay tree.
//!
//! The crate provides three containers:
//!
//! - [`SplayTree`](splay_tree::SplayTree), an ordered map that splays every accessed node to the
//!   root,
//! - [`AdaptiveHashMap`](adaptive_hash_map::AdaptiveHashMap), a hash table with a fixed number of
//!   buckets where every bucket is a splay tree,
//! - [`HashMap`](hash_map::HashMap), an unrelated linear probing table that grows on demand.
//!
//! The [`app`] module contains the command interpreters that drive these containers from a
//! script, and [`print`] renders them as text.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod entry;
pub mod adaptive_hash_map;
pub mod app;
pub mod arena;
pub mod error;
pub mod hash_map;
pub mod key;
pub mod print;
pub mod splay_tree;

pub use crate::entry::Entry;
pub use crate::error::{Error, Result};
pub use crate::key::{Modulo, Name};
