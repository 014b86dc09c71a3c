use std::{cmp::Ordering, fmt, marker::PhantomData, mem, ptr::NonNull};

use crate::{queue::Queue, stack::Stack};

/// Tree node.
struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    elem: T,
}

/// Rusty pointers to nodes.
type Link<T> = Option<NonNull<Node<T>>>;

/// Binary search tree. Every element in a node's left subtree is smaller
/// than the node's element and every element in its right subtree is
/// greater; duplicates are never stored.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    size: usize,
    _marker: PhantomData<T>,
}

/// Borrowing iterator over a traversal that was collected up front.
pub struct Iter<'a, T> {
    elems: Vec<&'a T>,
    current_idx: usize,
}

impl<T> Node<T> {
    /// Create new leaf.
    fn new(elem: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            left: None,
            right: None,
            elem,
        })))
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a tree with no elements.
    pub fn new() -> Self {
        BinarySearchTree {
            root: None,
            size: 0,
            _marker: PhantomData,
        }
    }

    /// Inserts `elem`. Returns `false`, leaving the tree untouched, if an
    /// equal element is already stored.
    pub fn insert(&mut self, elem: T) -> bool {
        let link = self.locate(&elem);

        unsafe {
            if (*link).is_some() {
                return false;
            }
            *link = Some(Node::new(elem));
        }

        self.size += 1;
        true
    }

    /// Walks down from the root and returns the link that holds `elem`, or
    /// the empty link where it would be inserted.
    fn locate(&mut self, elem: &T) -> *mut Link<T> {
        let mut link = &raw mut self.root;

        unsafe {
            while let Some(node) = *link {
                let node = node.as_ptr();
                link = match elem.cmp(&(*node).elem) {
                    Ordering::Less => &raw mut (*node).left,
                    Ordering::Greater => &raw mut (*node).right,
                    Ordering::Equal => break,
                };
            }
        }

        link
    }

    /// Returns `true` if an element equal to `elem` is in the tree.
    pub fn contains(&self, elem: &T) -> bool {
        self.get(elem).is_some()
    }

    /// Returns the stored element equal to `elem`.
    pub fn get(&self, elem: &T) -> Option<&T> {
        let mut current = self.root;

        while let Some(node) = current {
            unsafe {
                current = match elem.cmp(&(*node.as_ptr()).elem) {
                    Ordering::Less => (*node.as_ptr()).left,
                    Ordering::Greater => (*node.as_ptr()).right,
                    Ordering::Equal => return Some(&(*node.as_ptr()).elem),
                };
            }
        }

        None
    }

    /// Returns the parent of the node holding the minimum of the subtree
    /// rooted at `node`, or `None` if `node` itself is the minimum. Used to
    /// find in-order successors.
    unsafe fn min_value_parent_node(node: NonNull<Node<T>>) -> Link<T> {
        unsafe {
            let mut parent = node;
            let mut current = (*node.as_ptr()).left?;

            while let Some(left) = (*current.as_ptr()).left {
                parent = current;
                current = left;
            }

            Some(parent)
        }
    }

    /// Removes the element equal to `elem` and returns it.
    pub fn remove(&mut self, elem: &T) -> Option<T> {
        let link = self.locate(elem);

        unsafe {
            // Node not found
            let node = (*link)?;
            self.size -= 1;

            // Case 1: node has one child or none, the child takes its place.
            let (left, right) = ((*node.as_ptr()).left, (*node.as_ptr()).right);
            let Some(right) = right else {
                *link = left;
                return Some(Box::from_raw(node.as_ptr()).elem);
            };
            if left.is_none() {
                *link = Some(right);
                return Some(Box::from_raw(node.as_ptr()).elem);
            }

            // Case 2: node has two children. Its in-order successor (minimum
            // of the right subtree) is unlinked and its element moves up.
            let successor = match Self::min_value_parent_node(right) {
                Some(parent) => {
                    let Some(min) = (*parent.as_ptr()).left else {
                        unreachable!("min_value_parent_node returns a parent with a left child");
                    };
                    let min = Box::from_raw(min.as_ptr());
                    (*parent.as_ptr()).left = min.right;
                    min.elem
                }
                None => {
                    let min = Box::from_raw(right.as_ptr());
                    (*node.as_ptr()).right = min.right;
                    min.elem
                }
            };

            Some(mem::replace(&mut (*node.as_ptr()).elem, successor))
        }
    }

    /// Smallest element.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root?;
        unsafe {
            while let Some(left) = (*node.as_ptr()).left {
                node = left;
            }
            Some(&(*node.as_ptr()).elem)
        }
    }

    /// Largest element.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root?;
        unsafe {
            while let Some(right) = (*node.as_ptr()).right {
                node = right;
            }
            Some(&(*node.as_ptr()).elem)
        }
    }
}

impl<T> BinarySearchTree<T> {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of levels: 0 for an empty tree, 1 for a lone root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = Stack::new();
        pending.extend(self.root.map(|node| (node, 1)));

        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            unsafe {
                pending.extend((*node.as_ptr()).left.map(|left| (left, depth + 1)));
                pending.extend((*node.as_ptr()).right.map(|right| (right, depth + 1)));
            }
        }

        height
    }

    /// Frees every node.
    pub fn clear(&mut self) {
        let mut pending = Stack::new();
        pending.extend(self.root.take());

        while let Some(node) = pending.pop() {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            pending.extend(node.left);
            pending.extend(node.right);
        }

        self.size = 0;
    }

    /// Ascending order. Same as [`BinarySearchTree::inorder`].
    pub fn iter(&self) -> Iter<'_, T> {
        self.inorder()
    }

    /// Left subtree, node, right subtree: ascending order.
    pub fn inorder(&self) -> Iter<'_, T> {
        let mut elems = Vec::with_capacity(self.size);
        let mut pending = Stack::new();
        let mut current = self.root;

        unsafe {
            loop {
                // Go as far left as possible, remembering the way back.
                while let Some(node) = current {
                    pending.push(node);
                    current = (*node.as_ptr()).left;
                }

                let Some(node) = pending.pop() else {
                    break;
                };
                elems.push(&(*node.as_ptr()).elem);
                current = (*node.as_ptr()).right;
            }
        }

        Iter::new(elems)
    }

    /// Node, left subtree, right subtree.
    pub fn preorder(&self) -> Iter<'_, T> {
        let mut elems = Vec::with_capacity(self.size);
        let mut pending = Stack::new();
        pending.extend(self.root);

        while let Some(node) = pending.pop() {
            unsafe {
                elems.push(&(*node.as_ptr()).elem);
                // Right first so the left subtree is popped first.
                pending.extend((*node.as_ptr()).right);
                pending.extend((*node.as_ptr()).left);
            }
        }

        Iter::new(elems)
    }

    /// Left subtree, right subtree, node.
    pub fn postorder(&self) -> Iter<'_, T> {
        // Node, right, left reversed.
        let mut elems = Vec::with_capacity(self.size);
        let mut pending = Stack::new();
        pending.extend(self.root);

        while let Some(node) = pending.pop() {
            unsafe {
                elems.push(&(*node.as_ptr()).elem);
                pending.extend((*node.as_ptr()).left);
                pending.extend((*node.as_ptr()).right);
            }
        }
        elems.reverse();

        Iter::new(elems)
    }

    /// Breadth first, level by level, left to right.
    pub fn level_order(&self) -> Iter<'_, T> {
        let mut elems = Vec::with_capacity(self.size);
        let mut pending = Queue::new();
        pending.extend(self.root);

        while let Some(node) = pending.dequeue() {
            unsafe {
                elems.push(&(*node.as_ptr()).elem);
                pending.extend((*node.as_ptr()).left);
                pending.extend((*node.as_ptr()).right);
            }
        }

        Iter::new(elems)
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(elems: Vec<&'a T>) -> Self {
        Iter {
            elems,
            current_idx: 0,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = *self.elems.get(self.current_idx)?;
        self.current_idx += 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elems.len() - self.current_idx;

        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::BinarySearchTree;
    use std::rc::Rc;

    fn tree_values() -> Vec<i32> {
        vec![40, 20, 60, 10, 30, 25, 35, 50, 45, 70, 80, 75]
    }

    fn build() -> BinarySearchTree<i32> {
        tree_values().into_iter().collect()
    }

    fn is_sorted(tree: &BinarySearchTree<i32>) -> bool {
        let values: Vec<_> = tree.iter().collect();
        values.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_insert() {
        let numbers = tree_values();

        let mut tree = BinarySearchTree::new();
        assert!(tree.is_empty());

        assert!(tree.insert(numbers[0]));
        assert!(tree.contains(&numbers[0]));

        assert!(tree.insert(numbers[1]));
        assert!(tree.contains(&numbers[1]));

        assert!(tree.insert(numbers[2]));
        assert!(tree.contains(&numbers[2]));

        assert_eq!(tree.len(), 3);

        for n in &numbers[3..] {
            tree.insert(*n);
        }

        for n in &numbers {
            assert!(tree.contains(n));
        }
        assert!(!tree.contains(&0));

        assert_eq!(tree.len(), numbers.len());
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut tree = build();
        assert!(!tree.insert(30));
        assert!(!tree.insert(40));
        assert_eq!(tree.len(), tree_values().len());
        assert_eq!(tree.get(&30), Some(&30));
    }

    #[test]
    fn test_remove() {
        let mut tree = build();

        // Node with no children
        assert_eq!(tree.remove(&75), Some(75));
        assert!(!tree.contains(&75));

        // Node with one child to the right
        assert_eq!(tree.remove(&70), Some(70));
        assert!(!tree.contains(&70));
        assert!(tree.contains(&80));

        // Node with one child to the left
        assert_eq!(tree.remove(&50), Some(50));
        assert!(!tree.contains(&50));
        assert!(tree.contains(&45));

        // Node with two children, successor deeper than the right child
        assert_eq!(tree.remove(&20), Some(20));
        assert!(!tree.contains(&20));
        assert!(tree.contains(&10));
        assert!(tree.contains(&30));

        // Root
        assert_eq!(tree.remove(&40), Some(40));
        assert!(!tree.contains(&40));

        // Missing
        assert_eq!(tree.remove(&40), None);

        assert_eq!(tree.len(), 7);
        assert!(is_sorted(&tree));
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            vec![10, 25, 30, 35, 45, 60, 80]
        );
    }

    #[test]
    fn test_remove_successor_is_right_child() {
        let mut tree: BinarySearchTree<i32> = [60, 50, 70, 80].into_iter().collect();

        assert_eq!(tree.remove(&60), Some(60));
        assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![70, 50, 80]);
    }

    #[test]
    fn test_iter() {
        let mut values = tree_values();
        let tree = build();

        let mut iter = tree.iter();
        values.sort();

        for value in values.iter() {
            let tree_value = iter.next();
            assert!(tree_value.is_some());
            assert_eq!(Some(value), tree_value);
        }

        assert!(iter.next().is_none());
    }

    #[test]
    fn test_traversals() {
        let tree: BinarySearchTree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();

        assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), vec![1, 3, 2, 5, 7, 6, 4]);
        assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.inorder().size_hint(), (7, Some(7)));
    }

    #[test]
    fn test_min_max_height() {
        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.height(), 0);

        tree.insert(40);
        assert_eq!(tree.height(), 1);

        let tree = build();
        assert_eq!(tree.min(), Some(&10));
        assert_eq!(tree.max(), Some(&80));
        // 40 -> 60 -> 70 -> 80 -> 75
        assert_eq!(tree.height(), 5);
    }

    #[test]
    fn test_degenerate_tree_on_small_stack() {
        const N: u32 = 10_000;

        // Sorted input makes a linked list of right children, N levels deep.
        let worker = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(|| {
                let mut tree: BinarySearchTree<u32> = (0..N).collect();
                assert_eq!(tree.len(), N as usize);
                assert_eq!(tree.height(), N as usize);
                assert!(tree.contains(&(N - 1)));
                assert!(!tree.insert(N - 1));

                assert!(tree.iter().copied().eq(0..N));
                assert!(tree.preorder().copied().eq(0..N));
                assert!(tree.postorder().copied().eq((0..N).rev()));
                assert_eq!(tree.level_order().count(), N as usize);

                assert_eq!(tree.remove(&(N - 1)), Some(N - 1));
                assert_eq!(tree.remove(&0), Some(0));
                assert_eq!(tree.min(), Some(&1));
                assert_eq!(tree.height(), N as usize - 2);
            })
            .unwrap();

        worker.join().unwrap();
    }

    #[test]
    fn test_drop_frees_elements() {
        let marker = Rc::new(0);
        {
            let mut tree = BinarySearchTree::new();
            for n in 0..20 {
                tree.insert((n, Rc::clone(&marker)));
            }
            let removed = tree.remove(&(10, Rc::clone(&marker)));
            assert!(removed.is_some());
        }
        assert_eq!(Rc::strong_count(&marker), 1);

        let mut tree = build();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().next(), None);
    }
}
