use crate::error::{Error, Result};
use crate::red_black_tree::tree::{
    Duplicates, Insertion, RedBlackTree, RedBlackTreeIntoIter, RedBlackTreeIter,
};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};
use std::result;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// and keeps the number of black nodes equal along every root to leaf path. Inserting a key that
/// already exists is rejected and leaves the set unchanged.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
#[derive(Clone)]
pub struct RedBlackSet<T> {
    tree: RedBlackTree<T, ()>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            tree: RedBlackTree::new(),
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set untouched if the key already
    /// exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        self.try_insert(key).is_ok()
    }

    /// Inserts a key into the set, or returns `Error::DuplicateKeyRejected` if the key already
    /// exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    /// use red_black_collections::Error;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.try_insert(1), Ok(()));
    /// assert_eq!(set.try_insert(1), Err(Error::DuplicateKeyRejected));
    /// ```
    pub fn try_insert(&mut self, key: T) -> Result<()>
    where
        T: Ord,
    {
        match self.tree.insert(key, (), Duplicates::Reject) {
            Insertion::Vacant(_) => Ok(()),
            _ => Err(Error::DuplicateKeyRejected),
        }
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.remove(key).map(|entry| entry.key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.floor(key).map(|entry| &entry.key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.ceil(key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min().map(|entry| &entry.key)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max().map(|entry| &entry.key)
    }

    /// Returns `true` if every key of the set is also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let small = vec![1, 2].into_iter().collect::<RedBlackSet<u32>>();
    /// let large = vec![1, 2, 3].into_iter().collect::<RedBlackSet<u32>>();
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    pub fn is_subset(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.len() <= other.len() && self.iter().all(|key| other.contains(key))
    }

    /// Returns `true` if every key of `other` is also in the set.
    pub fn is_superset(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        other.is_subset(self)
    }

    /// Returns the union of two sets. The `+` operator is implemented to take the union of two
    /// sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut n = RedBlackSet::new();
    /// n.insert(1);
    /// n.insert(2);
    ///
    /// let mut m = RedBlackSet::new();
    /// m.insert(2);
    /// m.insert(3);
    ///
    /// let union = RedBlackSet::union(n, m);
    /// assert_eq!(union.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn union(left: Self, right: Self) -> Self
    where
        T: Ord,
    {
        let (mut larger, smaller) = if left.len() >= right.len() {
            (left, right)
        } else {
            (right, left)
        };
        larger.extend(smaller);
        larger
    }

    /// Returns the intersection of two sets. The `*` operator is implemented to take the
    /// intersection of two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut n = RedBlackSet::new();
    /// n.insert(1);
    /// n.insert(2);
    ///
    /// let mut m = RedBlackSet::new();
    /// m.insert(2);
    /// m.insert(3);
    ///
    /// let intersection = RedBlackSet::intersection(n, m);
    /// assert_eq!(intersection.iter().collect::<Vec<&u32>>(), vec![&2]);
    /// ```
    pub fn intersection(left: Self, right: Self) -> Self
    where
        T: Ord,
    {
        left.into_iter().filter(|key| right.contains(key)).collect()
    }

    /// Returns the difference of `left` and `right`. The returned set will contain all entries
    /// that do not have a key in `right`. The `-` operator is implemented to take the difference
    /// of two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut n = RedBlackSet::new();
    /// n.insert(1);
    /// n.insert(2);
    ///
    /// let mut m = RedBlackSet::new();
    /// m.insert(2);
    /// m.insert(3);
    ///
    /// let difference = RedBlackSet::difference(n, m);
    /// assert_eq!(difference.iter().collect::<Vec<&u32>>(), vec![&1]);
    /// ```
    pub fn difference(left: Self, right: Self) -> Self
    where
        T: Ord,
    {
        left.into_iter().filter(|key| !right.contains(key)).collect()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            tree_iter: self.tree.iter(),
        }
    }

    /// Returns the underlying red black tree.
    pub fn as_tree(&self) -> &RedBlackTree<T, ()> {
        &self.tree
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            tree_iter: self.tree.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    tree_iter: RedBlackTreeIntoIter<T, ()>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for RedBlackSetIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back().map(|pair| pair.0)
    }
}

impl<T> ExactSizeIterator for RedBlackSetIntoIter<T> {}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T> {
    tree_iter: RedBlackTreeIter<'a, T, ()>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back().map(|pair| pair.0)
    }
}

impl<'a, T> ExactSizeIterator for RedBlackSetIter<'a, T> where T: 'a {}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for RedBlackSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &RedBlackSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RedBlackSet<T> where T: Eq {}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> Add for RedBlackSet<T>
where
    T: Ord,
{
    type Output = RedBlackSet<T>;

    fn add(self, other: RedBlackSet<T>) -> RedBlackSet<T> {
        Self::union(self, other)
    }
}

impl<T> Mul for RedBlackSet<T>
where
    T: Ord,
{
    type Output = RedBlackSet<T>;

    fn mul(self, other: RedBlackSet<T>) -> RedBlackSet<T> {
        Self::intersection(self, other)
    }
}

impl<T> Sub for RedBlackSet<T>
where
    T: Ord,
{
    type Output = RedBlackSet<T>;

    fn sub(self, other: RedBlackSet<T>) -> RedBlackSet<T> {
        Self::difference(self, other)
    }
}

impl<T> Serialize for RedBlackSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for RedBlackSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackSetVisitor {
            marker: PhantomData,
        })
    }
}

struct RedBlackSetVisitor<T> {
    marker: PhantomData<fn() -> RedBlackSet<T>>,
}

impl<'de, T> Visitor<'de> for RedBlackSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = RedBlackSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = RedBlackSet::new();
        while let Some(key) = access.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use crate::error::Error;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.try_insert(1), Err(Error::DuplicateKeyRejected));
        assert_eq!(set.len(), 1);
        set.as_tree().assert_valid();
    }

    #[test]
    fn test_remove() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
    }

    #[test]
    fn test_min_max() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_subset_superset() {
        let small = vec![1, 3].into_iter().collect::<RedBlackSet<u32>>();
        let large = vec![1, 2, 3].into_iter().collect::<RedBlackSet<u32>>();
        let other = vec![1, 4].into_iter().collect::<RedBlackSet<u32>>();

        assert!(small.is_subset(&large));
        assert!(small.is_subset(&small));
        assert!(large.is_superset(&small));
        assert!(!other.is_subset(&large));
        assert!(!small.is_superset(&large));
    }

    #[test]
    fn test_union() {
        let mut n = RedBlackSet::new();
        n.insert(1);
        n.insert(2);
        n.insert(3);

        let mut m = RedBlackSet::new();
        m.insert(3);
        m.insert(4);
        m.insert(5);

        let union = n + m;
        union.as_tree().assert_valid();
        assert_eq!(
            union.iter().collect::<Vec<&u32>>(),
            vec![&1, &2, &3, &4, &5],
        );
        assert_eq!(union.len(), 5);
    }

    #[test]
    fn test_intersection() {
        let mut n = RedBlackSet::new();
        n.insert(1);
        n.insert(2);
        n.insert(3);

        let mut m = RedBlackSet::new();
        m.insert(3);
        m.insert(4);
        m.insert(5);

        let intersection = n * m;
        assert_eq!(intersection.iter().collect::<Vec<&u32>>(), vec![&3]);
        assert_eq!(intersection.len(), 1);
    }

    #[test]
    fn test_difference() {
        let mut n = RedBlackSet::new();
        n.insert(1);
        n.insert(2);
        n.insert(3);

        let mut m = RedBlackSet::new();
        m.insert(3);
        m.insert(4);
        m.insert(5);

        let difference = n - m;
        assert_eq!(difference.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
        assert_eq!(difference.len(), 2);
    }

    #[test]
    fn test_eq_and_clone() {
        let set = vec![3, 1, 2].into_iter().collect::<RedBlackSet<u32>>();
        let mut copy = set.clone();
        assert_eq!(set, copy);
        copy.remove(&2);
        assert_ne!(set, copy);
        assert_eq!(format!("{:?}", copy), "{1, 3}");
    }

    #[test]
    fn test_into_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let set = (0..40).collect::<RedBlackSet<u32>>();
        let mut iter = set.into_iter();
        assert_eq!(iter.len(), 40);
        assert_eq!(iter.next_back(), Some(39));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.len(), 38);
        assert_eq!(iter.rev().collect::<Vec<u32>>(), (1..39).rev().collect::<Vec<u32>>());
    }

    #[test]
    fn test_set_operations_on_larger_sets() {
        let evens = (0..50).filter(|key| key % 2 == 0).collect::<RedBlackSet<u32>>();
        let threes = (0..50).filter(|key| key % 3 == 0).collect::<RedBlackSet<u32>>();

        let union = evens.clone() + threes.clone();
        union.as_tree().assert_valid();
        assert_eq!(
            union.into_iter().collect::<Vec<u32>>(),
            (0..50).filter(|key| key % 2 == 0 || key % 3 == 0).collect::<Vec<u32>>(),
        );

        let intersection = evens.clone() * threes.clone();
        intersection.as_tree().assert_valid();
        assert_eq!(
            intersection.into_iter().collect::<Vec<u32>>(),
            (0..50).filter(|key| key % 6 == 0).collect::<Vec<u32>>(),
        );

        let difference = evens - threes;
        difference.as_tree().assert_valid();
        assert_eq!(
            difference.into_iter().collect::<Vec<u32>>(),
            (0..50).filter(|key| key % 2 == 0 && key % 3 != 0).collect::<Vec<u32>>(),
        );
    }

    #[test]
    fn test_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(set.iter().rev().collect::<Vec<&u32>>(), vec![&5, &3, &1]);
    }

    #[test]
    fn test_serde() {
        let set = vec![2u32, 1u32].into_iter().collect::<RedBlackSet<u32>>();
        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(2) },
                Token::U32(1),
                Token::U32(2),
                Token::SeqEnd,
            ],
        );
    }
}
