use crate::error::{Error, Result};
use crate::red_black_tree::tree::{Duplicates, Insertion, RedBlackTree, RedBlackTreeIter};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered multimap implemented using a red black tree.
///
/// Every key maps to the list of values inserted under it, kept in insertion order. A key is
/// present as long as it has at least one value.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackMultimap;
///
/// let mut multimap = RedBlackMultimap::new();
/// multimap.insert("fruit", "apple");
/// multimap.insert("fruit", "pear");
/// multimap.insert("nut", "pecan");
///
/// assert_eq!(multimap.get("fruit"), Some(&["apple", "pear"][..]));
/// assert_eq!(multimap.len(), 3);
/// assert_eq!(multimap.keys_len(), 2);
///
/// assert_eq!(multimap.remove("fruit"), Some(vec!["apple", "pear"]));
/// assert_eq!(multimap.get("fruit"), None);
/// ```
#[derive(Clone)]
pub struct RedBlackMultimap<T, U> {
    tree: RedBlackTree<T, Vec<U>>,
    len: usize,
}

impl<T, U> RedBlackMultimap<T, U> {
    /// Constructs a new, empty `RedBlackMultimap<T, U>`.
    pub fn new() -> Self {
        RedBlackMultimap {
            tree: RedBlackTree::new(),
            len: 0,
        }
    }

    /// Appends a value to the values of a key, adding the key if it is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultimap;
    ///
    /// let mut multimap = RedBlackMultimap::new();
    /// multimap.insert(1, 'a');
    /// multimap.insert(1, 'b');
    /// assert_eq!(multimap.get(&1), Some(&['a', 'b'][..]));
    /// ```
    pub fn insert(&mut self, key: T, value: U)
    where
        T: Ord,
    {
        self.len += 1;
        match self.tree.insert(key, vec![value], Duplicates::Reject) {
            Insertion::Vacant(_) => {},
            Insertion::Occupied(handle, entry) | Insertion::Replaced(handle, entry) => {
                if let Some(values) = self.tree.value_mut(handle) {
                    values.extend(entry.value);
                }
            },
        }
    }

    /// Removes a key and returns all of its values. Returns `None` if the key does not exist.
    pub fn remove<V>(&mut self, key: &V) -> Option<Vec<U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let values = self.tree.remove(key)?.value;
        self.len -= values.len();
        Some(values)
    }

    /// Checks if a key exists in the multimap.
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns the values associated with a key in insertion order, or `None` if the key does not
    /// exist.
    pub fn get<V>(&self, key: &V) -> Option<&[U]>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .find_node_handle(key)
            .and_then(|handle| self.tree.entry(handle))
            .map(|entry| entry.value.as_slice())
    }

    /// Returns the values associated with a key in insertion order, or `Error::KeyNotFound` if
    /// the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultimap;
    /// use red_black_collections::Error;
    ///
    /// let mut multimap = RedBlackMultimap::new();
    /// multimap.insert(1, 1);
    /// assert_eq!(multimap.try_get(&1), Ok(&[1][..]));
    /// assert_eq!(multimap.try_get(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn try_get<V>(&self, key: &V) -> Result<&[U]>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the number of key-value pairs in the multimap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of distinct keys in the multimap.
    pub fn keys_len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the multimap is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the multimap, removing all keys and values.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Returns the minimum key of the multimap. Returns `None` if the multimap is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min().map(|entry| &entry.key)
    }

    /// Returns the maximum key of the multimap. Returns `None` if the multimap is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max().map(|entry| &entry.key)
    }

    /// Returns an iterator over the multimap. The iterator will yield every key together with
    /// all of its values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultimap;
    ///
    /// let mut multimap = RedBlackMultimap::new();
    /// multimap.insert(2, 'c');
    /// multimap.insert(1, 'a');
    /// multimap.insert(1, 'b');
    ///
    /// let mut iterator = multimap.iter();
    /// assert_eq!(iterator.next(), Some((&1, &['a', 'b'][..])));
    /// assert_eq!(iterator.next(), Some((&2, &['c'][..])));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMultimapIter<'_, T, U> {
        RedBlackMultimapIter {
            tree_iter: self.tree.iter(),
        }
    }

    /// Returns the underlying red black tree.
    pub fn as_tree(&self) -> &RedBlackTree<T, Vec<U>> {
        &self.tree
    }
}

impl<'a, T, U> IntoIterator for &'a RedBlackMultimap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMultimapIter<'a, T, U>;
    type Item = (&'a T, &'a [U]);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackMultimap<T, U>`.
///
/// This iterator traverses the keys of the multimap in-order and yields each key with a slice of
/// its values.
pub struct RedBlackMultimapIter<'a, T, U> {
    tree_iter: RedBlackTreeIter<'a, T, Vec<U>>,
}

impl<'a, T, U> Iterator for RedBlackMultimapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a [U]);

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter
            .next()
            .map(|(key, values)| (key, values.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<T, U> Default for RedBlackMultimap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> PartialEq for RedBlackMultimap<T, U>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &RedBlackMultimap<T, U>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, U> Eq for RedBlackMultimap<T, U>
where
    T: Eq,
    U: Eq,
{
}

impl<T, U> fmt::Debug for RedBlackMultimap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U> FromIterator<(T, U)> for RedBlackMultimap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut multimap = RedBlackMultimap::new();
        for (key, value) in iter {
            multimap.insert(key, value);
        }
        multimap
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMultimap;
    use crate::error::Error;

    #[test]
    fn test_len_empty() {
        let multimap: RedBlackMultimap<u32, u32> = RedBlackMultimap::new();
        assert_eq!(multimap.len(), 0);
        assert_eq!(multimap.keys_len(), 0);
        assert!(multimap.is_empty());
    }

    #[test]
    fn test_insert_appends() {
        let mut multimap = RedBlackMultimap::new();
        multimap.insert(1, 'a');
        multimap.insert(2, 'b');
        multimap.insert(1, 'c');

        assert_eq!(multimap.get(&1), Some(&['a', 'c'][..]));
        assert_eq!(multimap.get(&2), Some(&['b'][..]));
        assert_eq!(multimap.get(&3), None);
        assert_eq!(multimap.len(), 3);
        assert_eq!(multimap.keys_len(), 2);
        multimap.as_tree().assert_valid();
    }

    #[test]
    fn test_try_get() {
        let mut multimap = RedBlackMultimap::new();
        multimap.insert(1, 'a');
        assert_eq!(multimap.try_get(&1), Ok(&['a'][..]));
        assert_eq!(multimap.try_get(&0), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_remove() {
        let mut multimap = RedBlackMultimap::new();
        multimap.insert(1, 'a');
        multimap.insert(1, 'b');
        multimap.insert(2, 'c');

        assert_eq!(multimap.remove(&1), Some(vec!['a', 'b']));
        assert_eq!(multimap.remove(&1), None);
        assert!(!multimap.contains_key(&1));
        assert_eq!(multimap.len(), 1);
        multimap.as_tree().assert_valid();
    }

    #[test]
    fn test_min_max() {
        let multimap = vec![(3, 'a'), (1, 'b'), (3, 'c')]
            .into_iter()
            .collect::<RedBlackMultimap<u32, char>>();
        assert_eq!(multimap.min(), Some(&1));
        assert_eq!(multimap.max(), Some(&3));
    }

    #[test]
    fn test_eq_and_debug() {
        let left = vec![(1, 'a'), (2, 'b'), (1, 'c')]
            .into_iter()
            .collect::<RedBlackMultimap<u32, char>>();
        let right = vec![(2, 'b'), (1, 'a'), (1, 'c')]
            .into_iter()
            .collect::<RedBlackMultimap<u32, char>>();
        let reordered = vec![(1, 'c'), (1, 'a'), (2, 'b')]
            .into_iter()
            .collect::<RedBlackMultimap<u32, char>>();

        assert_eq!(left, right);
        assert_ne!(left, reordered);
        assert_eq!(format!("{:?}", left), "{1: ['a', 'c'], 2: ['b']}");
    }

    #[test]
    fn test_clear() {
        let mut multimap = vec![(1, 1), (1, 2)]
            .into_iter()
            .collect::<RedBlackMultimap<u32, u32>>();
        multimap.clear();
        assert!(multimap.is_empty());
        assert_eq!(multimap.len(), 0);
        assert_eq!(multimap.iter().next(), None);
    }
}
