use std::{fmt, marker::PhantomData, ptr::NonNull};

use super::LinkedSequence;
use crate::error::{AdtError, Result};

struct Node<T> {
    elem: T,
    prev: Link<T>,
    next: Link<T>,
}

type Link<T> = Option<NonNull<Node<T>>>;

impl<T> Node<T> {
    /// Allocates a detached node and leaks it as a raw pointer. The list
    /// frees it again through `Box::from_raw`.
    fn new(elem: T, prev: Link<T>, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { elem, prev, next })))
    }
}

/// Doubly linked list with O(1) access at both ends.
pub struct DoublyLinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, elem: T) {
        let node = Node::new(elem, None, self.head);

        match self.head {
            Some(old) => unsafe { (*old.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }

        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, elem: T) {
        let node = Node::new(elem, self.tail, None);

        match self.tail {
            Some(old) => unsafe { (*old.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|node| unsafe { self.unlink(node) })
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|node| unsafe { self.unlink(node) })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).elem })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).elem })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).elem })
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).elem })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).elem })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).elem })
    }

    /// Inserts `elem` so that it ends up at position `index`.
    pub fn insert(&mut self, index: usize, elem: T) -> Result<()> {
        if index > self.len {
            return Err(AdtError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.push_front(elem);
        } else if index == self.len {
            self.push_back(elem);
        } else if let Some(next) = self.node_at(index) {
            unsafe {
                let prev = (*next.as_ptr()).prev;
                let node = Node::new(elem, prev, Some(next));
                if let Some(prev) = prev {
                    (*prev.as_ptr()).next = Some(node);
                }
                (*next.as_ptr()).prev = Some(node);
            }
            self.len += 1;
        }

        Ok(())
    }

    /// Removes the element at position `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        match self.node_at(index) {
            Some(node) => Ok(unsafe { self.unlink(node) }),
            None => Err(AdtError::IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }

    /// Removes the first element equal to `elem`.
    pub fn remove(&mut self, elem: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut current = self.head;

        while let Some(node) = current {
            unsafe {
                if (*node.as_ptr()).elem == *elem {
                    return Some(self.unlink(node));
                }
                current = (*node.as_ptr()).next;
            }
        }

        None
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Walks from whichever end is closer to `index`.
    fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }

        unsafe {
            if index < self.len / 2 {
                let mut node = self.head;
                for _ in 0..index {
                    node = node.and_then(|n| (*n.as_ptr()).next);
                }
                node
            } else {
                let mut node = self.tail;
                for _ in 0..(self.len - 1 - index) {
                    node = node.and_then(|n| (*n.as_ptr()).prev);
                }
                node
            }
        }
    }

    /// Detaches `node` from its neighbours, frees it and returns its value.
    ///
    /// `node` must belong to this list.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        unsafe {
            let boxed = Box::from_raw(node.as_ptr());

            match boxed.prev {
                Some(prev) => (*prev.as_ptr()).next = boxed.next,
                None => self.head = boxed.next,
            }
            match boxed.next {
                Some(next) => (*next.as_ptr()).prev = boxed.prev,
                None => self.tail = boxed.prev,
            }

            self.len -= 1;
            boxed.elem
        }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T> LinkedSequence<T> for DoublyLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn push_front(&mut self, elem: T) {
        DoublyLinkedList::push_front(self, elem);
    }

    fn push_back(&mut self, elem: T) {
        DoublyLinkedList::push_back(self, elem);
    }

    fn pop_front(&mut self) -> Option<T> {
        DoublyLinkedList::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        DoublyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        DoublyLinkedList::back(self)
    }

    fn iter(&self) -> Iter<'_, T> {
        DoublyLinkedList::iter(self)
    }
}

pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.front.map(|node| unsafe {
            self.remaining -= 1;
            self.front = (*node.as_ptr()).next;
            &(*node.as_ptr()).elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.back.map(|node| unsafe {
            self.remaining -= 1;
            self.back = (*node.as_ptr()).prev;
            &(*node.as_ptr()).elem
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.front.map(|node| unsafe {
            self.remaining -= 1;
            self.front = (*node.as_ptr()).next;
            &mut (*node.as_ptr()).elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.back.map(|node| unsafe {
            self.remaining -= 1;
            self.back = (*node.as_ptr()).prev;
            &mut (*node.as_ptr()).elem
        })
    }
}

pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::DoublyLinkedList;
    use std::rc::Rc;

    #[test]
    fn both_ends() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(list.pop_back(), None);

        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), list.back());

        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);

        list.push_front(7);
        assert_eq!(list.back(), Some(&7));
    }

    #[test]
    fn double_ended_iteration() {
        let list: DoublyLinkedList<i32> = (1..=6).collect();

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.len(), 4);
        let middle: Vec<_> = iter.copied().collect();
        assert_eq!(middle, vec![2, 3, 4, 5]);

        assert_eq!(
            list.iter().rev().copied().collect::<Vec<_>>(),
            vec![6, 5, 4, 3, 2, 1]
        );
        assert_eq!(
            list.into_iter().rev().collect::<Vec<_>>(),
            vec![6, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn positional_ops() {
        let mut list: DoublyLinkedList<i32> = vec![10, 30, 50].into_iter().collect();

        list.insert(1, 20).unwrap();
        list.insert(3, 40).unwrap();
        list.insert(5, 60).unwrap();
        list.insert(0, 0).unwrap();
        assert!(list.insert(8, 0).is_err());
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![0, 10, 20, 30, 40, 50, 60]
        );

        // Both halves of the lookup.
        assert_eq!(list.get(1), Some(&10));
        assert_eq!(list.get(5), Some(&50));
        assert_eq!(list.get(7), None);
        if let Some(v) = list.get_mut(4) {
            *v += 1;
        }

        assert_eq!(list.remove_at(4).unwrap(), 41);
        assert_eq!(list.remove_at(5).unwrap(), 60);
        assert_eq!(list.back(), Some(&50));
        assert!(list.remove_at(5).is_err());

        assert_eq!(list.remove(&0), Some(0));
        assert_eq!(list.remove(&0), None);
        assert_eq!(list.front(), Some(&10));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn iter_mut_from_both_ends() {
        let mut list: DoublyLinkedList<i32> = (1..=4).collect();
        let mut iter = list.iter_mut();
        if let Some(first) = iter.next() {
            *first = 100;
        }
        if let Some(last) = iter.next_back() {
            *last = 400;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![100, 2, 3, 400]);
    }

    #[test]
    fn drop_frees_nodes() {
        let marker = Rc::new(());
        {
            let mut list = DoublyLinkedList::new();
            for _ in 0..5 {
                list.push_back(Rc::clone(&marker));
            }
            list.remove_at(2).unwrap();
            assert_eq!(Rc::strong_count(&marker), 5);
        }
        assert_eq!(Rc::strong_count(&marker), 1);

        let long: DoublyLinkedList<u32> = (0..100_000).collect();
        assert_eq!(long.len(), 100_000);
    }
}
