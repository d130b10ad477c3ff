//! Chunked slab that owns the nodes of the tree and hands out index handles to them.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to an object allocated in a `TypedArena<T>`.
///
/// Handles are plain indices: they carry no ownership and stay `Copy`. A handle is invalidated
/// when its object is freed, and the arena may hand the same handle out again on a later
/// allocation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

impl Handle {
    /// A handle that the arena never hands out. Containers use it as an out-of-band marker for
    /// "no object".
    pub const SENTINEL: Handle = Handle {
        chunk_index: usize::MAX,
        block_index: usize::MAX,
    };
}

#[derive(Clone)]
enum Block<T> {
    Occupied(T),
    // next block on the free list
    Vacant(Option<Handle>),
}

/// A slab of objects of one type, addressed by `Handle`.
///
/// Objects live in fixed-capacity chunks, so a growing arena never moves the objects it already
/// holds. Freed blocks form an intrusive free list and are reused most recent first. Dropping the
/// arena drops every live object.
///
/// # Examples
///
/// ```
/// use red_black_collections::arena::{Handle, TypedArena};
///
/// let mut arena = TypedArena::new(2);
/// let root = arena.allocate("root");
/// let leaf = arena.allocate("leaf");
///
/// assert!(arena.contains(&root));
/// assert!(!arena.contains(&Handle::SENTINEL));
///
/// arena[leaf] = "updated";
/// assert_eq!(arena.free(&leaf), "updated");
/// assert_eq!(arena.get(&leaf), None);
/// assert_eq!(arena.len(), 1);
/// ```
#[derive(Clone)]
pub struct TypedArena<T> {
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    free_head: Option<Handle>,
    live: usize,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>` holding up to `chunk_size` objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            chunks: Vec::new(),
            chunk_size,
            free_head: None,
            live: 0,
        }
    }

    fn block(&self, handle: &Handle) -> Option<&Block<T>> {
        self.chunks
            .get(handle.chunk_index)
            .and_then(|chunk| chunk.get(handle.block_index))
    }

    fn block_mut(&mut self, handle: &Handle) -> Option<&mut Block<T>> {
        self.chunks
            .get_mut(handle.chunk_index)
            .and_then(|chunk| chunk.get_mut(handle.block_index))
    }

    // Appends to the last chunk, opening a new chunk when it is full.
    fn push_block(&mut self, value: T) -> Handle {
        let needs_chunk = self
            .chunks
            .last()
            .map_or(true, |chunk| chunk.len() == self.chunk_size);
        if needs_chunk {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }
        let chunk_index = self.chunks.len() - 1;
        let chunk = &mut self.chunks[chunk_index];
        chunk.push(Block::Occupied(value));
        Handle {
            chunk_index,
            block_index: chunk.len() - 1,
        }
    }

    /// Stores `value` and returns its handle. A previously freed block is reused before the arena
    /// grows.
    pub fn allocate(&mut self, value: T) -> Handle {
        self.live += 1;
        let handle = match self.free_head {
            Some(handle) => handle,
            None => return self.push_block(value),
        };
        let block = &mut self.chunks[handle.chunk_index][handle.block_index];
        match mem::replace(block, Block::Occupied(value)) {
            Block::Vacant(next) => self.free_head = next,
            Block::Occupied(_) => panic!("Error: free list points at an occupied block."),
        }
        handle
    }

    /// Removes the object behind `handle` and returns it. The block joins the free list.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was never allocated or has already been freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(16);
    /// let first = arena.allocate(1);
    /// arena.free(&first);
    /// assert_eq!(arena.allocate(2), first);
    /// ```
    pub fn free(&mut self, handle: &Handle) -> T {
        let free_head = self.free_head;
        let block = match self.block_mut(handle) {
            Some(block) => block,
            None => panic!("Error: attempting to free invalid block."),
        };
        match mem::replace(block, Block::Vacant(free_head)) {
            Block::Occupied(value) => {
                self.free_head = Some(*handle);
                self.live -= 1;
                value
            },
            Block::Vacant(next) => {
                *block = Block::Vacant(next);
                panic!("Error: attempting to free vacant block.");
            },
        }
    }

    /// Returns `true` if `handle` refers to a live object.
    pub fn contains(&self, handle: &Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Returns a reference to the object behind `handle`, or `None` if the handle is not live.
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        match self.block(handle) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the object behind `handle`, or `None` if the handle is not
    /// live.
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        match self.block_mut(handle) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drops every object and releases every chunk. All outstanding handles are invalidated.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.free_head = None;
        self.live = 0;
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle does not refer to a live object.")
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;
    use super::TypedArena;

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new(1024);
        arena.free(&Handle {
            chunk_index: 0,
            block_index: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        arena.free(&x);
        arena.free(&x);
    }

    #[test]
    #[should_panic]
    fn test_free_sentinel() {
        let mut arena = TypedArena::new(1024);
        arena.allocate(0);
        arena.free(&Handle::SENTINEL);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = TypedArena::new(2);
        assert_eq!(
            arena.allocate(0),
            Handle {
                chunk_index: 0,
                block_index: 0
            },
        );
        assert_eq!(
            arena.allocate(0),
            Handle {
                chunk_index: 0,
                block_index: 1
            },
        );
        assert_eq!(
            arena.allocate(0),
            Handle {
                chunk_index: 1,
                block_index: 0
            },
        );
    }

    #[test]
    fn test_free_reuses_block() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        assert_eq!(arena.free(&x), 0);
        assert_eq!(arena.free(&y), 1);
        assert_eq!(arena.allocate(2), y);
        assert_eq!(arena.allocate(3), x);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_contains_and_growth_after_reuse() {
        let mut arena = TypedArena::new(2);
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        let z = arena.allocate(2);
        assert!(arena.contains(&y));

        arena.free(&y);
        assert!(!arena.contains(&y));
        assert_eq!(arena.allocate(3), y);
        assert_eq!(
            arena.allocate(4),
            Handle {
                chunk_index: 1,
                block_index: 1
            },
        );
        assert_eq!(arena[x] + arena[y] + arena[z], 5);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn test_get_sentinel() {
        let mut arena = TypedArena::new(1024);
        arena.allocate(0);
        assert_eq!(arena.get(&Handle::SENTINEL), None);
        assert_eq!(arena.get_mut(&Handle::SENTINEL), None);
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        arena.free(&x);
        assert_eq!(arena.get(&x), None);
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new(2);
        let x = arena.allocate(0);
        arena.allocate(1);
        arena.allocate(2);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(&x), None);
        assert_eq!(arena.allocate(3), x);
    }
}
