//! Chunked storage for tree nodes.

use std::mem;
use std::ops::{Index, IndexMut};

/// Number of objects allocated per chunk when no chunk size is given.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// A copyable reference to an object allocated in a `TypedArena<T>`.
///
/// A handle stays valid until the object it refers to is freed. After that the slot may be reused
/// by a later allocation, so a stale handle can observe an unrelated object.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// An allocator that only allocates a single type of object.
///
/// Objects are addressed by `Handle`s instead of references, which lets a container link its
/// objects to each other in any shape (including back-references) while the arena remains the
/// only owner. Freed slots are threaded onto a free list and reused before any new slot is
/// created. When every chunk is full a new chunk is allocated, so existing objects never move.
///
/// # Examples
///
/// ```
/// use splay_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), Some(2));
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    head: Option<Handle>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>` with `DEFAULT_CHUNK_SIZE` objects per chunk. No
    /// memory is allocated until the first object is.
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    fn block(&self, handle: Handle) -> Option<&Block<T>> {
        self.chunks
            .get(handle.chunk_index)
            .and_then(|chunk| chunk.get(handle.block_index))
    }

    /// Moves `value` into the arena and returns the handle that addresses it.
    pub fn allocate(&mut self, value: T) -> Handle {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.len += 1;

        match self.head.take() {
            None => {
                let chunk_index = self.chunks.len() - 1;
                let chunk = &mut self.chunks[chunk_index];
                chunk.push(Block::Occupied(value));
                Handle {
                    chunk_index,
                    block_index: chunk.len() - 1,
                }
            },
            Some(handle) => {
                let block = &mut self.chunks[handle.chunk_index][handle.block_index];
                match mem::replace(block, Block::Occupied(value)) {
                    Block::Vacant(next) => {
                        self.head = next;
                        handle
                    },
                    Block::Occupied(_) => panic!("Expected the free list to hold a vacant block."),
                }
            },
        }
    }

    /// Frees the object addressed by `handle` and returns it. Returns `None` if the handle does
    /// not address a live object.
    pub fn free(&mut self, handle: Handle) -> Option<T> {
        match self.block(handle) {
            Some(Block::Occupied(_)) => {},
            _ => return None,
        }
        let block = &mut self.chunks[handle.chunk_index][handle.block_index];
        match mem::replace(block, Block::Vacant(self.head.take())) {
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(handle);
                Some(value)
            },
            Block::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to the object addressed by `handle`, or `None` if the
    /// handle does not address a live object.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.block(handle) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the object addressed by `handle`, or `None` if the handle
    /// does not address a live object.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self
            .chunks
            .get_mut(handle.chunk_index)
            .and_then(|chunk| chunk.get_mut(handle.block_index))
        {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for TypedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle does not address a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle does not address a live object.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Handle, TypedArena};

    fn handle(chunk_index: usize, block_index: usize) -> Handle {
        Handle {
            chunk_index,
            block_index,
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_chunk_size() {
        let _arena: TypedArena<u32> = TypedArena::with_chunk_size(0);
    }

    #[test]
    fn test_allocate() {
        let mut arena = TypedArena::new();
        assert_eq!(arena.allocate(0), handle(0, 0));
        assert_eq!(arena.allocate(0), handle(0, 1));
        assert_eq!(arena.allocate(0), handle(0, 2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = TypedArena::with_chunk_size(2);
        assert_eq!(arena.allocate(0), handle(0, 0));
        assert_eq!(arena.allocate(0), handle(0, 1));
        assert_eq!(arena.allocate(0), handle(1, 0));
    }

    #[test]
    fn test_free_reuses_slot() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        arena.allocate(1);
        assert_eq!(arena.free(x), Some(0));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.allocate(2), x);
        assert_eq!(arena[x], 2);
    }

    #[test]
    fn test_free_twice() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        assert_eq!(arena.free(x), Some(0));
        assert_eq!(arena.free(x), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_free_invalid_handle() {
        let mut arena: TypedArena<u32> = TypedArena::new();
        assert_eq!(arena.free(handle(0, 0)), None);
    }

    #[test]
    fn test_full_chunk_after_free() {
        let mut arena = TypedArena::with_chunk_size(2);
        let x = arena.allocate(0);
        arena.allocate(1);
        arena.allocate(2);
        arena.free(x);
        assert_eq!(arena.allocate(3), x);
        assert_eq!(arena.allocate(4), handle(1, 1));
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn test_get() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        assert_eq!(arena.get(x), Some(&0));
        assert_eq!(arena.get(handle(0, 1)), None);
        arena.free(x);
        assert_eq!(arena.get(x), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        *arena.get_mut(x).unwrap() = 1;
        assert_eq!(arena.get(x), Some(&1));
        assert_eq!(arena.get_mut(handle(1, 0)), None);
    }

    #[test]
    #[should_panic]
    fn test_index_vacant() {
        let mut arena = TypedArena::new();
        let x = arena.allocate(0);
        arena.free(x);
        let _value: u32 = arena[x];
    }
}
