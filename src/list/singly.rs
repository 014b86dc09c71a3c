use std::{fmt, ptr};

use super::LinkedSequence;
use crate::error::{AdtError, Result};

struct Node<T> {
    elem: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    fn new(elem: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { elem, next })
    }
}

/// Singly linked list. The head is owned through boxes; a raw pointer to
/// the last node makes `push_back` O(1).
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    tail: *mut Node<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_back(&mut self, elem: T) {
        let mut node = Node::new(elem, None);
        let new_tail: *mut Node<T> = &mut *node;

        if !self.tail.is_null() {
            unsafe {
                (*self.tail).next = Some(node);
            }
        } else {
            self.head = Some(node);
        }

        self.tail = new_tail;
        self.len += 1;
    }

    pub fn push_front(&mut self, elem: T) {
        let mut node = Node::new(elem, self.head.take());

        if self.tail.is_null() {
            self.tail = &mut *node;
        }

        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the first node from the list and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        // take() leaves None behind and hands back the old head.
        self.head.take().map(|h| {
            self.head = h.next;

            if self.head.is_none() {
                self.tail = ptr::null_mut();
            }

            self.len -= 1;

            h.elem
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.elem)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.elem)
    }

    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.as_ref().map(|node| &node.elem) }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        unsafe { self.tail.as_mut().map(|node| &mut node.elem) }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
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
            return Ok(());
        }
        if index == self.len {
            self.push_back(elem);
            return Ok(());
        }

        // 0 < index < len, so the predecessor has a successor and the tail
        // does not move.
        let prev = self.node_mut(index - 1);
        let next = prev.next.take();
        prev.next = Some(Node::new(elem, next));
        self.len += 1;

        Ok(())
    }

    /// Removes the element at position `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(AdtError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            return self.pop_front().ok_or(AdtError::IndexOutOfBounds { index, len: 0 });
        }

        let prev = self.node_mut(index - 1);
        let prev_ptr: *mut Node<T> = &mut *prev;
        let Some(mut removed) = prev.next.take() else {
            return Err(AdtError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        };
        prev.next = removed.next.take();

        if prev.next.is_none() {
            self.tail = prev_ptr;
        }
        self.len -= 1;

        Ok(removed.elem)
    }

    /// Removes the first node whose value equals `elem`.
    pub fn remove(&mut self, elem: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut prev: *mut Node<T> = ptr::null_mut();
        let mut cursor = &mut self.head;

        while cursor.as_ref().is_some_and(|node| node.elem != *elem) {
            let node = cursor.as_mut()?;
            prev = &mut **node;
            cursor = &mut node.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();

        // The removed node was the last one.
        if cursor.is_none() {
            self.tail = prev;
        }

        self.len -= 1;
        Some(removed.elem)
    }

    /// Reverses the list in place by relinking the nodes.
    pub fn reverse(&mut self) {
        let new_tail = match self.head.as_deref_mut() {
            Some(node) => node as *mut Node<T>,
            None => return,
        };

        let mut reversed: Link<T> = None;
        let mut current = self.head.take();

        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }

        self.head = reversed;
        self.tail = new_tail;
    }

    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.tail = ptr::null_mut();
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Node at `index`. Callers check the bound first.
    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        let len = self.len;
        debug_assert!(index < len);
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref_mut());
        }
        match node {
            Some(node) => node,
            None => unreachable!("index {index} checked against len {len}"),
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink one box at a time so long lists don't recurse on drop.
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T> LinkedSequence<T> for SinglyLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn push_front(&mut self, elem: T) {
        SinglyLinkedList::push_front(self, elem);
    }

    fn push_back(&mut self, elem: T) {
        SinglyLinkedList::push_back(self, elem);
    }

    fn pop_front(&mut self) -> Option<T> {
        SinglyLinkedList::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        SinglyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        SinglyLinkedList::back(self)
    }

    fn iter(&self) -> Iter<'_, T> {
        SinglyLinkedList::iter(self)
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
