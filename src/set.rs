use std::fmt;

use crate::binary_tree::{self, BinarySearchTree};

/// Mathematical set: no duplicates, iterated in ascending order. Stored in
/// a [`BinarySearchTree`], so membership costs one walk down the tree.
pub struct Set<T> {
    tree: BinarySearchTree<T>,
}

impl<T: Ord> Set<T> {
    pub fn new() -> Self {
        Set {
            tree: BinarySearchTree::new(),
        }
    }

    /// Adds `elem`. Returns `false` if it was already a member.
    pub fn insert(&mut self, elem: T) -> bool {
        self.tree.insert(elem)
    }

    /// Removes `elem`. Returns `false` if it was not a member.
    pub fn remove(&mut self, elem: &T) -> bool {
        self.tree.remove(elem).is_some()
    }

    pub fn contains(&self, elem: &T) -> bool {
        self.tree.contains(elem)
    }

    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|elem| other.contains(elem))
    }
}

impl<T: Ord + Clone> Set<T> {
    /// Elements in `self`, in `other`, or in both.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Elements in both `self` and `other`.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|elem| other.contains(elem))
            .cloned()
            .collect()
    }

    /// Elements in `self` but not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|elem| !other.contains(elem))
            .cloned()
            .collect()
    }
}

impl<T> Set<T> {
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Ascending order.
    pub fn iter(&self) -> binary_tree::Iter<'_, T> {
        self.tree.iter()
    }
}

impl<T: Ord> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = binary_tree::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
