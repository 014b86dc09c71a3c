use crate::{container::LinearContainer, list::SinglyLinkedList};

/// FIFO queue. Elements join at the tail of a [`SinglyLinkedList`] and
/// leave from its head, both in O(1).
#[derive(Clone, PartialEq)]
pub struct Queue<T> {
    elems: SinglyLinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            elems: SinglyLinkedList::new(),
        }
    }

    pub fn enqueue(&mut self, elem: T) {
        self.elems.push_back(elem);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.elems.pop_front()
    }

    /// Next element to leave the queue.
    pub fn front(&self) -> Option<&T> {
        self.elems.front()
    }

    /// Most recently enqueued element.
    pub fn back(&self) -> Option<&T> {
        self.elems.back()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> crate::list::singly::Iter<'_, T> {
        self.elems.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Queue").field(&self.elems).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.enqueue(elem);
        }
    }
}

impl<T> LinearContainer<T> for Queue<T> {
    fn put(&mut self, elem: T) {
        self.enqueue(elem);
    }

    fn take(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn peek(&self) -> Option<&T> {
        self.front()
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn clear(&mut self) {
        Queue::clear(self);
    }
}
