use crate::red_black_tree::tree::{Duplicates, Insertion, RedBlackTree, RedBlackTreeIter};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered multiset implemented using a red black tree.
///
/// Equal elements share a single tree node that counts how many times the element occurs, so the
/// tree stays as small as the number of distinct elements.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackMultiset;
///
/// let mut multiset = RedBlackMultiset::new();
/// multiset.insert(1);
/// multiset.insert(1);
/// multiset.insert(2);
///
/// assert_eq!(multiset.len(), 3);
/// assert_eq!(multiset.distinct_len(), 2);
/// assert_eq!(multiset.count(&1), 2);
///
/// assert!(multiset.remove(&1));
/// assert_eq!(multiset.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
/// ```
#[derive(Clone)]
pub struct RedBlackMultiset<T> {
    tree: RedBlackTree<T, usize>,
    len: usize,
}

impl<T> RedBlackMultiset<T> {
    /// Constructs a new, empty `RedBlackMultiset<T>`.
    pub fn new() -> Self {
        RedBlackMultiset {
            tree: RedBlackTree::new(),
            len: 0,
        }
    }

    /// Inserts one occurrence of an element and returns how many times the element now occurs.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let mut multiset = RedBlackMultiset::new();
    /// assert_eq!(multiset.insert("a"), 1);
    /// assert_eq!(multiset.insert("a"), 2);
    /// ```
    pub fn insert(&mut self, key: T) -> usize
    where
        T: Ord,
    {
        self.len += 1;
        let handle = match self.tree.insert(key, 1, Duplicates::Reject) {
            Insertion::Vacant(_) => return 1,
            Insertion::Occupied(handle, _) | Insertion::Replaced(handle, _) => handle,
        };
        let mut occurrences = 1;
        if let Some(count) = self.tree.value_mut(handle) {
            *count += 1;
            occurrences = *count;
        }
        occurrences
    }

    /// Removes one occurrence of an element. Returns `false` if the element does not occur in the
    /// multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let mut multiset = RedBlackMultiset::new();
    /// multiset.insert(1);
    /// multiset.insert(1);
    /// assert!(multiset.remove(&1));
    /// assert_eq!(multiset.count(&1), 1);
    /// assert!(multiset.remove(&1));
    /// assert!(!multiset.remove(&1));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let handle = match self.tree.find_node_handle(key) {
            Some(handle) => handle,
            None => return false,
        };
        let mut remaining = 0;
        if let Some(count) = self.tree.value_mut(handle) {
            *count -= 1;
            remaining = *count;
        }
        if remaining == 0 {
            self.tree.remove_node(handle);
        }
        self.len -= 1;
        true
    }

    /// Removes every occurrence of an element and returns how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let mut multiset = RedBlackMultiset::new();
    /// multiset.insert(1);
    /// multiset.insert(1);
    /// assert_eq!(multiset.remove_all(&1), 2);
    /// assert_eq!(multiset.remove_all(&1), 0);
    /// ```
    pub fn remove_all<V>(&mut self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let removed = self.tree.remove(key).map_or(0, |entry| entry.value);
        self.len -= removed;
        removed
    }

    /// Returns the number of times an element occurs in the multiset.
    pub fn count<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .find_node_handle(key)
            .and_then(|handle| self.tree.entry(handle))
            .map_or(0, |entry| entry.value)
    }

    /// Checks if an element occurs in the multiset.
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns the number of elements in the multiset, counting every occurrence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of distinct elements in the multiset.
    pub fn distinct_len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the multiset is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the multiset, removing all elements.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Returns the minimum element of the multiset. Returns `None` if the multiset is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min().map(|entry| &entry.key)
    }

    /// Returns the maximum element of the multiset. Returns `None` if the multiset is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max().map(|entry| &entry.key)
    }

    /// Returns `true` if no element occurs more often in the multiset than in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let small = vec![1, 1, 2].into_iter().collect::<RedBlackMultiset<u32>>();
    /// let large = vec![1, 1, 1, 2, 3].into_iter().collect::<RedBlackMultiset<u32>>();
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    pub fn is_subset(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.len <= other.len && self.counts().all(|(key, count)| count <= other.count(key))
    }

    /// Returns an iterator over the multiset. Every element is yielded as many times as it
    /// occurs, in ascending order.
    pub fn iter(&self) -> RedBlackMultisetIter<'_, T> {
        RedBlackMultisetIter {
            tree_iter: self.tree.iter(),
            current: None,
        }
    }

    /// Returns an iterator over the distinct elements of the multiset and their counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let multiset = vec![2, 1, 2].into_iter().collect::<RedBlackMultiset<u32>>();
    /// assert_eq!(
    ///     multiset.counts().collect::<Vec<(&u32, usize)>>(),
    ///     vec![(&1, 1), (&2, 2)],
    /// );
    /// ```
    pub fn counts(&self) -> RedBlackMultisetCounts<'_, T> {
        RedBlackMultisetCounts {
            tree_iter: self.tree.iter(),
        }
    }

    /// Returns the underlying red black tree.
    pub fn as_tree(&self) -> &RedBlackTree<T, usize> {
        &self.tree
    }
}

impl<'a, T> IntoIterator for &'a RedBlackMultiset<T>
where
    T: 'a,
{
    type IntoIter = RedBlackMultisetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackMultiset<T>`.
///
/// This iterator traverses the elements of the multiset in-order and yields each element once per
/// occurrence.
pub struct RedBlackMultisetIter<'a, T> {
    tree_iter: RedBlackTreeIter<'a, T, usize>,
    current: Option<(&'a T, usize)>,
}

impl<'a, T> Iterator for RedBlackMultisetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.current {
                Some((key, remaining)) if remaining > 0 => {
                    self.current = Some((key, remaining - 1));
                    return Some(key);
                },
                _ => {
                    let (key, count) = self.tree_iter.next()?;
                    self.current = Some((key, *count));
                },
            }
        }
    }
}

/// An iterator over the distinct elements of a `RedBlackMultiset<T>` and their counts.
pub struct RedBlackMultisetCounts<'a, T> {
    tree_iter: RedBlackTreeIter<'a, T, usize>,
}

impl<'a, T> Iterator for RedBlackMultisetCounts<'a, T>
where
    T: 'a,
{
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next().map(|(key, count)| (key, *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<T> Default for RedBlackMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for RedBlackMultiset<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &RedBlackMultiset<T>) -> bool {
        self.len == other.len && self.tree.iter().eq(other.tree.iter())
    }
}

impl<T> Eq for RedBlackMultiset<T> where T: Eq {}

impl<T> fmt::Debug for RedBlackMultiset<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for RedBlackMultiset<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut multiset = RedBlackMultiset::new();
        for key in iter {
            multiset.insert(key);
        }
        multiset
    }
}
