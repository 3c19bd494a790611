use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::avl_tree::{Error, Result};
use log::debug;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::result;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// rebalances the nodes on the path back to the root, so the height of a set with `n` elements
/// never exceeds roughly `1.44 * log2(n + 2)`.
///
/// Inserting an element that is already present leaves the set unchanged.
///
/// # Examples
///
/// ```
/// use avl_index::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.find_min(), Ok(&0));
/// assert_eq!(set.find_max(), Ok(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            root: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the underlying tree. A set with a single element has height `0`
    /// and an empty set has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// for i in 1..=5 {
    ///     set.insert(i);
    /// }
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Returns the minimum element of the set. Returns `Error::EmptyContainer` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.find_min(), Err(Error::EmptyContainer));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.find_min(), Ok(&1));
    /// ```
    pub fn find_min(&self) -> Result<&T> {
        tree::min(&self.root).ok_or(Error::EmptyContainer)
    }

    /// Returns the maximum element of the set. Returns `Error::EmptyContainer` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.find_max(), Err(Error::EmptyContainer));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.find_max(), Ok(&3));
    /// ```
    pub fn find_max(&self) -> Result<&T> {
        tree::max(&self.root).ok_or(Error::EmptyContainer)
    }

    /// Returns an iterator over the set. The iterator will yield elements using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Inserts an element into the set. Returns `true` if the element was not already present.
    /// If an equal element exists, the set is left unchanged and the argument is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let (root, inserted) = tree::insert(self.root.take(), element);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes an element from the set. If the element exists in the set, it will return the
    /// removed element. Otherwise it will return `None` and leave the set unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = tree::remove(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if an element exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::contains(&self.root, key)
    }

    /// Walks the whole tree, recomputing every subtree height, and verifies that the elements
    /// are in search order, that every node is balanced, and that every cached height is
    /// accurate. Meant for test harnesses; a correct set never fails this check.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for i in 0..100 {
    ///     set.insert(i);
    /// }
    /// assert!(set.check_invariant().is_ok());
    /// ```
    pub fn check_invariant(&self) -> Result<()> {
        tree::check(&self.root, None, None)
            .map(|_| ())
            .map_err(|err| {
                debug!("avl set of {} elements failed its check: {}", self.len, err);
                err
            })
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned elements.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { element, right, .. } = node;
            self.current = right;
            element
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { ref element, ref right, .. } = node;
            self.current = right;
            element
        })
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &AvlSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Eq {}

impl<T> Serialize for AvlSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct AvlSetVisitor<T> {
    marker: PhantomData<fn() -> AvlSet<T>>,
}

impl<'de, T> Visitor<'de> for AvlSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = AvlSet<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = AvlSet::new();
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for AvlSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(AvlSetVisitor {
            marker: PhantomData,
        })
    }
}
