use crate::arena::{Handle, TypedArena};
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Links, Node, Side};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::vec;

/// Number of nodes allocated per arena chunk.
const CHUNK_SIZE: usize = 256;

/// Indentation per level used by `RedBlackTree::dump` callers that have no preference.
pub const DEFAULT_INDENT: usize = 4;

const NIL: Handle = Handle::SENTINEL;

/// A handle to a node of a `RedBlackTree<T, U>`.
///
/// A handle is invalidated when its node is removed. Using a stale handle either fails the lookup
/// or refers to whichever node later reused the slot.
pub type NodeHandle = Handle;

/// What `RedBlackTree::insert` does when the inserted key compares equal to a stored key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Duplicates {
    /// Leave the tree untouched and hand the entry back along with the existing node.
    Reject,
    /// Swap the stored entry for the new one and hand back the old entry.
    Replace,
    /// Descend right on equality and link a separate node for the new entry.
    Allow,
}

/// The outcome of `RedBlackTree::insert`.
#[derive(Debug, Eq, PartialEq)]
pub enum Insertion<T, U> {
    /// A new node was linked into the tree.
    Vacant(NodeHandle),
    /// An equal key was present and the insertion was rejected. Holds the existing node and the
    /// rejected entry.
    Occupied(NodeHandle, Entry<T, U>),
    /// An equal key was present and its entry was replaced. Holds the node and the old entry.
    Replaced(NodeHandle, Entry<T, U>),
}

/// A red black tree whose nodes live in a typed arena and refer to each other by handle.
///
/// Every node is red or black, the root is black, no red node has a red child, and every path
/// from a node down to the sentinel passes through the same number of black nodes. Together these
/// bound the height of the tree by `2 * log2(n + 1)`.
///
/// Absent children and the root's parent are represented by a single per-tree sentinel that is
/// always black. The engine never decides how duplicate keys are handled; callers pass a
/// `Duplicates` policy to every insertion.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::{Duplicates, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(10, "a", Duplicates::Reject);
/// tree.insert(5, "b", Duplicates::Reject);
/// tree.insert(1, "c", Duplicates::Reject);
///
/// assert!(tree.contains(&5));
/// assert_eq!(tree.iter().map(|(key, _)| *key).collect::<Vec<u32>>(), vec![1, 5, 10]);
///
/// assert_eq!(tree.remove(&5).map(|entry| entry.value), Some("b"));
/// assert_eq!(tree.remove(&5), None);
/// tree.assert_valid();
/// ```
#[derive(Clone)]
pub struct RedBlackTree<T, U> {
    arena: TypedArena<Node<T, U>>,
    root: Handle,
    nil: Links,
    len: usize,
}

impl<T, U> RedBlackTree<T, U> {
    /// Constructs a new, empty `RedBlackTree<T, U>` whose root is the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32, u32> = RedBlackTree::new();
    /// ```
    pub fn new() -> Self {
        RedBlackTree {
            arena: TypedArena::new(CHUNK_SIZE),
            root: NIL,
            nil: Links::sentinel(),
            len: 0,
        }
    }

    fn links(&self, handle: Handle) -> &Links {
        if handle == NIL {
            &self.nil
        } else {
            &self.arena[handle].links
        }
    }

    fn color(&self, handle: Handle) -> Color {
        self.links(handle).color
    }

    fn set_color(&mut self, handle: Handle, color: Color) {
        if handle == NIL {
            debug_assert_eq!(color, Color::Black, "the sentinel must stay black");
            return;
        }
        self.arena[handle].links.color = color;
    }

    fn parent(&self, handle: Handle) -> Handle {
        self.links(handle).parent
    }

    // The sentinel's parent is scratch space for deletion.
    fn set_parent(&mut self, handle: Handle, parent: Handle) {
        if handle == NIL {
            self.nil.parent = parent;
        } else {
            self.arena[handle].links.parent = parent;
        }
    }

    fn child(&self, handle: Handle, side: Side) -> Handle {
        self.links(handle).child(side)
    }

    fn set_child(&mut self, handle: Handle, side: Side, child: Handle) {
        debug_assert!(handle != NIL, "the sentinel has no children");
        *self.arena[handle].links.child_mut(side) = child;
    }

    fn side_of(&self, parent: Handle, child: Handle) -> Side {
        if self.child(parent, Side::Left) == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    // Walks from `handle` as far as possible towards `side`.
    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while self.child(handle, side) != NIL {
            handle = self.child(handle, side);
        }
        handle
    }

    // In-order successor for `Side::Right`, predecessor for `Side::Left`.
    fn neighbor(&self, mut handle: Handle, side: Side) -> Handle {
        let child = self.child(handle, side);
        if child != NIL {
            return self.extreme(child, side.opposite());
        }
        let mut parent = self.parent(handle);
        while parent != NIL && handle == self.child(parent, side) {
            handle = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// Replaces the subtree rooted at `old` with the subtree rooted at `new` in `old`'s parent.
    /// `new` may be the sentinel, in which case the sentinel's parent records the splice point.
    fn transplant(&mut self, old: Handle, new: Handle) {
        let parent = self.parent(old);
        if parent == NIL {
            self.root = new;
        } else {
            let side = self.side_of(parent, old);
            self.set_child(parent, side, new);
        }
        self.set_parent(new, parent);
    }

    /// Rotates the subtree rooted at `handle` towards `side`: the child on the opposite side is
    /// promoted into `handle`'s position and `handle` becomes its `side` child.
    fn rotate(&mut self, handle: Handle, side: Side) {
        trace!("rotating {:?} to the {:?}", handle, side);
        let promoted = self.child(handle, side.opposite());
        debug_assert!(promoted != NIL, "rotation requires a child to promote");

        let inner = self.child(promoted, side);
        self.set_child(handle, side.opposite(), inner);
        if inner != NIL {
            self.set_parent(inner, handle);
        }

        self.transplant(handle, promoted);
        self.set_child(promoted, side, handle);
        self.set_parent(handle, promoted);
    }

    fn insert_fixup(&mut self, mut node: Handle) {
        while self.color(self.parent(node)) == Color::Red {
            let parent = self.parent(node);
            // a red parent is never the root, so the grandparent is a real node
            let grandparent = self.parent(parent);
            let side = self.side_of(grandparent, parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                trace!("insert fixup at {:?}: red uncle, recoloring", node);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
            } else {
                if node == self.child(parent, side.opposite()) {
                    trace!("insert fixup at {:?}: black uncle, inner grandchild", node);
                    node = parent;
                    self.rotate(node, side);
                }
                trace!("insert fixup at {:?}: black uncle, outer grandchild", node);
                let parent = self.parent(node);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    fn delete_fixup(&mut self, mut node: Handle) {
        while node != self.root && self.color(node) == Color::Black {
            let parent = self.parent(node);
            let side = self.side_of(parent, node);
            // the sibling of a doubly black node has a positive black height
            let mut sibling = self.child(parent, side.opposite());

            if self.color(sibling) == Color::Red {
                trace!("delete fixup at {:?}: red sibling", node);
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, side.opposite());
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!("delete fixup at {:?}: black sibling with black children", node);
                self.set_color(sibling, Color::Red);
                node = parent;
            } else {
                if self.color(far) == Color::Black {
                    trace!("delete fixup at {:?}: black sibling with red near child", node);
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, side.opposite());
                    sibling = self.child(parent, side.opposite());
                }
                trace!("delete fixup at {:?}: black sibling with red far child", node);
                let parent_color = self.color(parent);
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Black);
                let far = self.child(sibling, side.opposite());
                self.set_color(far, Color::Black);
                self.rotate(parent, side);
                node = self.root;
            }
        }
        self.set_color(node, Color::Black);
    }

    /// Inserts a key-value pair into the tree. `duplicates` decides what happens when the tree
    /// already holds an equal key.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::{Duplicates, Insertion, RedBlackTree};
    /// use red_black_collections::Entry;
    ///
    /// let mut tree = RedBlackTree::new();
    /// let handle = match tree.insert(1, 'a', Duplicates::Reject) {
    ///     Insertion::Vacant(handle) => handle,
    ///     _ => unreachable!(),
    /// };
    ///
    /// assert_eq!(
    ///     tree.insert(1, 'b', Duplicates::Reject),
    ///     Insertion::Occupied(handle, Entry::new(1, 'b')),
    /// );
    /// assert_eq!(
    ///     tree.insert(1, 'c', Duplicates::Replace),
    ///     Insertion::Replaced(handle, Entry::new(1, 'a')),
    /// );
    ///
    /// tree.insert(1, 'd', Duplicates::Allow);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T, value: U, duplicates: Duplicates) -> Insertion<T, U>
    where
        T: Ord,
    {
        let mut parent = NIL;
        let mut curr = self.root;
        let mut side = Side::Left;

        while curr != NIL {
            parent = curr;
            side = match key.cmp(&self.arena[curr].entry.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => match duplicates {
                    Duplicates::Allow => Side::Right,
                    Duplicates::Reject => {
                        return Insertion::Occupied(curr, Entry::new(key, value));
                    },
                    Duplicates::Replace => {
                        let old_entry =
                            mem::replace(&mut self.arena[curr].entry, Entry::new(key, value));
                        return Insertion::Replaced(curr, old_entry);
                    },
                },
            };
            curr = self.child(curr, side);
        }

        let new_node = self.arena.allocate(Node::new(key, value, parent));
        if parent == NIL {
            self.root = new_node;
        } else {
            self.set_child(parent, side, new_node);
        }
        self.len += 1;

        self.insert_fixup(new_node);
        Insertion::Vacant(new_node)
    }

    /// Removes a key from the tree and returns its entry, or `None` if the key does not exist.
    /// When the tree holds several equal keys, one of them is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::{Duplicates, RedBlackTree};
    /// use red_black_collections::Entry;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, 1, Duplicates::Reject);
    /// assert_eq!(tree.remove(&1), Some(Entry::new(1, 1)));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let handle = self.find_node_handle(key)?;
        Some(self.remove_node(handle))
    }

    /// Unlinks the node behind `handle`, frees it, and returns its entry.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to a node of this tree.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Entry<T, U> {
        assert!(
            self.arena.contains(&handle),
            "Error: attempting to remove a node that is not in the tree.",
        );

        let mut removed_color = self.color(handle);
        let replacement;

        if self.child(handle, Side::Left) == NIL {
            replacement = self.child(handle, Side::Right);
            self.transplant(handle, replacement);
        } else if self.child(handle, Side::Right) == NIL {
            replacement = self.child(handle, Side::Left);
            self.transplant(handle, replacement);
        } else {
            let right = self.child(handle, Side::Right);
            let successor = self.extreme(right, Side::Left);
            removed_color = self.color(successor);
            replacement = self.child(successor, Side::Right);

            if self.parent(successor) == handle {
                self.set_parent(replacement, successor);
            } else {
                self.transplant(successor, replacement);
                self.set_child(successor, Side::Right, right);
                self.set_parent(right, successor);
            }

            self.transplant(handle, successor);
            let left = self.child(handle, Side::Left);
            self.set_child(successor, Side::Left, left);
            self.set_parent(left, successor);
            let color = self.color(handle);
            self.set_color(successor, color);
        }

        if removed_color == Color::Black {
            self.delete_fixup(replacement);
        }
        self.nil.parent = NIL;
        self.len -= 1;

        self.arena.free(&handle).entry
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::{Duplicates, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, (), Duplicates::Reject);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find_node_handle(key).is_some()
    }

    /// Returns the handle of a node whose key equals `key`, or `None` if there is no such node.
    pub fn find_node_handle<V>(&self, key: &V) -> Option<NodeHandle>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while curr != NIL {
            match key.cmp(self.arena[curr].entry.key.borrow()) {
                Ordering::Less => curr = self.child(curr, Side::Left),
                Ordering::Greater => curr = self.child(curr, Side::Right),
                Ordering::Equal => return Some(curr),
            }
        }
        None
    }

    /// Returns the entry stored in the node behind `handle`, or `None` if the handle is stale.
    pub fn entry(&self, handle: NodeHandle) -> Option<&Entry<T, U>> {
        self.arena.get(&handle).map(|node| &node.entry)
    }

    /// Returns a mutable reference to the value stored in the node behind `handle`, or `None` if
    /// the handle is stale. Keys are never handed out mutably.
    pub fn value_mut(&mut self, handle: NodeHandle) -> Option<&mut U> {
        self.arena.get_mut(&handle).map(|node| &mut node.entry.value)
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the root of the tree is the sentinel.
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Frees every node in the tree.
    pub fn clear(&mut self) {
        debug!("clearing red black tree with {} nodes", self.len);
        self.arena.clear();
        self.root = NIL;
        self.nil = Links::sentinel();
        self.len = 0;
    }

    /// Returns the entry with the minimum key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&Entry<T, U>> {
        self.entry(self.extreme(self.root, Side::Left))
    }

    /// Returns the entry with the maximum key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&Entry<T, U>> {
        self.entry(self.extreme(self.root, Side::Right))
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    pub fn floor<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut best = NIL;
        while curr != NIL {
            match key.cmp(self.arena[curr].entry.key.borrow()) {
                Ordering::Less => curr = self.child(curr, Side::Left),
                Ordering::Greater => {
                    best = curr;
                    curr = self.child(curr, Side::Right);
                },
                Ordering::Equal => return self.entry(curr),
            }
        }
        self.entry(best)
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    pub fn ceil<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut best = NIL;
        while curr != NIL {
            match key.cmp(self.arena[curr].entry.key.borrow()) {
                Ordering::Greater => curr = self.child(curr, Side::Right),
                Ordering::Less => {
                    best = curr;
                    curr = self.child(curr, Side::Left);
                },
                Ordering::Equal => return self.entry(curr),
            }
        }
        self.entry(best)
    }

    /// Visits every key-value pair in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::{Duplicates, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(2, (), Duplicates::Reject);
    /// tree.insert(1, (), Duplicates::Reject);
    ///
    /// let mut keys = Vec::new();
    /// tree.traverse(|key, _| keys.push(*key));
    /// assert_eq!(keys, vec![1, 2]);
    /// ```
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&T, &U),
    {
        for (key, value) in self.iter() {
            visit(key, value);
        }
    }

    /// Returns an iterator over the tree. The iterator will yield key-value pairs using in-order
    /// traversal.
    pub fn iter(&self) -> RedBlackTreeIter<'_, T, U> {
        RedBlackTreeIter {
            tree: self,
            front: self.extreme(self.root, Side::Left),
            back: self.extreme(self.root, Side::Right),
            remaining: self.len,
        }
    }

    /// Returns the number of black nodes on every path from the root down to the sentinel, not
    /// counting the sentinel.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut curr = self.root;
        while curr != NIL {
            if self.color(curr) == Color::Black {
                height += 1;
            }
            curr = self.child(curr, Side::Left);
        }
        height
    }

    /// Renders the tree sideways: the right subtree is printed above its parent, every level is
    /// indented by `indent` more spaces, and each line holds a key and the node's color.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::{Duplicates, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in &[10, 5, 15] {
    ///     tree.insert(*key, (), Duplicates::Reject);
    /// }
    /// assert_eq!(tree.dump(2), "  15 (R)\n10 (B)\n  5 (R)\n");
    /// ```
    pub fn dump(&self, indent: usize) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        self.dump_subtree(self.root, indent, 0, &mut out);
        out
    }

    fn dump_subtree(&self, handle: Handle, indent: usize, depth: usize, out: &mut String)
    where
        T: fmt::Display,
    {
        if handle == NIL {
            return;
        }
        self.dump_subtree(self.child(handle, Side::Right), indent, depth + 1, out);
        let node = &self.arena[handle];
        out.push_str(&format!(
            "{:width$}{} ({})\n",
            "",
            node.entry.key,
            node.links.color.symbol(),
            width = indent * depth,
        ));
        self.dump_subtree(self.child(handle, Side::Left), indent, depth + 1, out);
    }

    /// Checks every structural invariant of the tree and panics on the first violation.
    ///
    /// Keys must be in non-decreasing order; they are strictly increasing unless entries were
    /// inserted with `Duplicates::Allow`.
    ///
    /// # Panics
    ///
    /// Panics if the tree is malformed. A malformed tree is always a bug in the tree itself.
    pub fn assert_valid(&self)
    where
        T: Ord,
    {
        assert_eq!(self.nil.color, Color::Black, "sentinel is not black");
        assert_eq!(self.nil.left, NIL, "sentinel has a left child");
        assert_eq!(self.nil.right, NIL, "sentinel has a right child");
        assert_eq!(self.nil.parent, NIL, "sentinel parent was not reset");
        assert_eq!(self.color(self.root), Color::Black, "root is not black");
        assert_eq!(self.parent(self.root), NIL, "root has a parent");

        self.check_subtree(self.root);

        let mut count = 0;
        let mut prev: Option<&T> = None;
        let mut curr = self.extreme(self.root, Side::Left);
        while curr != NIL {
            let key = &self.arena[curr].entry.key;
            if let Some(prev) = prev {
                assert!(prev <= key, "keys are out of order");
            }
            prev = Some(key);
            count += 1;
            curr = self.neighbor(curr, Side::Right);
        }
        assert_eq!(count, self.len, "reachable node count does not match length");
        assert_eq!(self.arena.len(), self.len, "arena holds unreachable nodes");
    }

    // Returns the black height of the subtree rooted at `handle`.
    fn check_subtree(&self, handle: Handle) -> usize {
        if handle == NIL {
            return 0;
        }
        let links = self.links(handle);
        for &side in &[Side::Left, Side::Right] {
            let child = links.child(side);
            if child != NIL {
                assert_eq!(self.parent(child), handle, "child does not link back to its parent");
                assert!(
                    links.color == Color::Black || self.color(child) == Color::Black,
                    "red node has a red child",
                );
            }
        }
        let left_height = self.check_subtree(links.left);
        let right_height = self.check_subtree(links.right);
        assert_eq!(left_height, right_height, "black heights of subtrees differ");
        match links.color {
            Color::Black => left_height + 1,
            Color::Red => left_height,
        }
    }
}

impl<T, U> fmt::Debug for RedBlackTree<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U> Default for RedBlackTree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> FromIterator<(T, U)> for RedBlackTree<T, U>
where
    T: Ord,
{
    /// Collects pairs into a tree that keeps the last value seen for each key.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut tree = RedBlackTree::new();
        for (key, value) in iter {
            tree.insert(key, value, Duplicates::Replace);
        }
        tree
    }
}

impl<T, U> IntoIterator for RedBlackTree<T, U> {
    type IntoIter = RedBlackTreeIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        // the successor walk reads ancestors, so nothing is freed until the order is known
        let mut order = Vec::with_capacity(self.len);
        let mut curr = self.extreme(self.root, Side::Left);
        while curr != NIL {
            order.push(curr);
            curr = self.neighbor(curr, Side::Right);
        }
        let entries = order
            .iter()
            .map(|handle| self.arena.free(handle).entry.into_pair())
            .collect::<Vec<(T, U)>>();
        RedBlackTreeIntoIter {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a RedBlackTree<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackTreeIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackTree<T, U>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned entries.
pub struct RedBlackTreeIntoIter<T, U> {
    entries: vec::IntoIter<(T, U)>,
}

impl<T, U> Iterator for RedBlackTreeIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T, U> DoubleEndedIterator for RedBlackTreeIntoIter<T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<T, U> ExactSizeIterator for RedBlackTreeIntoIter<T, U> {}

/// An iterator for `RedBlackTree<T, U>`.
///
/// This iterator traverses the elements of the tree in-order by following parent links and yields
/// immutable references.
pub struct RedBlackTreeIter<'a, T, U> {
    tree: &'a RedBlackTree<T, U>,
    front: Handle,
    back: Handle,
    remaining: usize,
}

impl<'a, T, U> Clone for RedBlackTreeIter<'a, T, U> {
    fn clone(&self) -> Self {
        RedBlackTreeIter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, U> Iterator for RedBlackTreeIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let handle = self.front;
        self.front = tree.neighbor(handle, Side::Right);
        self.remaining -= 1;
        let Entry { ref key, ref value } = tree.arena[handle].entry;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U> DoubleEndedIterator for RedBlackTreeIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let handle = self.back;
        self.back = tree.neighbor(handle, Side::Left);
        self.remaining -= 1;
        let Entry { ref key, ref value } = tree.arena[handle].entry;
        Some((key, value))
    }
}

impl<'a, T, U> ExactSizeIterator for RedBlackTreeIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
}
