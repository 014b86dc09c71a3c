use std::{fmt, marker::PhantomData, ptr::NonNull};

use super::LinkedSequence;

struct Node<T> {
    elem: T,
    next: NonNull<Node<T>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

/// Singly linked ring. Only the tail is stored: `tail.next` is the front,
/// so both ends are reachable in O(1) and the last node always points back
/// at the first.
pub struct CircularList<T> {
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        CircularList {
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

    /// Links a new node right after the tail, that is, as the new front.
    /// Returns the node so `push_back` can promote it to tail.
    fn link_front(&mut self, elem: T) -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Box::new(Node {
            elem,
            next: NonNull::dangling(),
        })));

        unsafe {
            match self.tail {
                Some(tail) => {
                    (*node.as_ptr()).next = (*tail.as_ptr()).next;
                    (*tail.as_ptr()).next = node;
                }
                None => {
                    // A single node is its own successor.
                    (*node.as_ptr()).next = node;
                    self.tail = Some(node);
                }
            }
        }

        self.len += 1;
        node
    }

    pub fn push_front(&mut self, elem: T) {
        self.link_front(elem);
    }

    pub fn push_back(&mut self, elem: T) {
        let node = self.link_front(elem);
        self.tail = Some(node);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let tail = self.tail?;

        unsafe {
            let head = (*tail.as_ptr()).next;
            if head == tail {
                self.tail = None;
            } else {
                (*tail.as_ptr()).next = (*head.as_ptr()).next;
            }

            self.len -= 1;
            Some(Box::from_raw(head.as_ptr()).elem)
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.tail
            .map(|tail| unsafe { &(*(*tail.as_ptr()).next.as_ptr()).elem })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).elem })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.iter().nth(index)
    }

    /// Advances the front `n` positions: the old front moves to the back.
    /// Rotating by a multiple of `len` leaves the order unchanged.
    pub fn rotate(&mut self, n: usize) {
        let Some(mut tail) = self.tail else {
            return;
        };

        for _ in 0..(n % self.len) {
            tail = unsafe { (*tail.as_ptr()).next };
        }
        self.tail = Some(tail);
    }

    /// Removes the first element equal to `elem`.
    pub fn remove(&mut self, elem: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let tail = self.tail?;
        let mut prev = tail;

        unsafe {
            for _ in 0..self.len {
                let current = (*prev.as_ptr()).next;
                if (*current.as_ptr()).elem == *elem {
                    if current == prev {
                        self.tail = None;
                    } else {
                        (*prev.as_ptr()).next = (*current.as_ptr()).next;
                        if current == tail {
                            self.tail = Some(prev);
                        }
                    }
                    self.len -= 1;
                    return Some(Box::from_raw(current.as_ptr()).elem);
                }
                prev = current;
            }
        }

        None
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// One lap around the ring, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.tail.map(|tail| unsafe { (*tail.as_ptr()).next }),
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Endless walk around the ring starting at the front. Yields `None`
    /// only when the list is empty.
    pub fn cycle(&self) -> Cycle<'_, T> {
        Cycle {
            next: self.tail.map(|tail| unsafe { (*tail.as_ptr()).next }),
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        for elem in iter {
            list.push_back(elem);
        }
        list
    }
}

impl<T> LinkedSequence<T> for CircularList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn push_front(&mut self, elem: T) {
        CircularList::push_front(self, elem);
    }

    fn push_back(&mut self, elem: T) {
        CircularList::push_back(self, elem);
    }

    fn pop_front(&mut self) -> Option<T> {
        CircularList::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        CircularList::front(self)
    }

    fn back(&self) -> Option<&T> {
        CircularList::back(self)
    }

    fn iter(&self) -> Iter<'_, T> {
        CircularList::iter(self)
    }
}

pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.next.map(|node| unsafe {
            self.remaining -= 1;
            self.next = Some((*node.as_ptr()).next);
            &(*node.as_ptr()).elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

pub struct Cycle<'a, T> {
    next: Link<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Cycle<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| unsafe {
            self.next = Some((*node.as_ptr()).next);
            &(*node.as_ptr()).elem
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CircularList;

    fn collect(list: &CircularList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn ring_order() {
        let mut list = CircularList::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);

        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);

        // The walk wraps around after the back.
        let twice: Vec<i32> = list.cycle().take(7).copied().collect();
        assert_eq!(twice, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn rotate() {
        let mut list: CircularList<i32> = (1..=5).collect();

        list.rotate(2);
        assert_eq!(collect(&list), vec![3, 4, 5, 1, 2]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&2));

        list.rotate(5);
        assert_eq!(collect(&list), vec![3, 4, 5, 1, 2]);

        list.rotate(8);
        assert_eq!(collect(&list), vec![1, 2, 3, 4, 5]);

        let mut empty = CircularList::<i32>::new();
        empty.rotate(3);
        assert_eq!(empty.cycle().next(), None);
    }

    #[test]
    fn remove() {
        let mut list: CircularList<i32> = (1..=4).collect();

        assert_eq!(list.remove(&4), Some(4));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.remove(&9), None);
        assert_eq!(collect(&list), vec![2, 3]);

        list.push_back(4);
        assert_eq!(collect(&list), vec![2, 3, 4]);

        assert_eq!(list.remove(&3), Some(3));
        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(list.remove(&4), Some(4));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
    }

    #[test]
    fn long_ring_drops() {
        let mut list: CircularList<u32> = (0..100_000).collect();
        assert_eq!(list.len(), 100_000);
        assert_eq!(list.iter().count(), 100_000);

        list.rotate(99_999);
        assert_eq!(list.front(), Some(&99_999));
        assert_eq!(list.back(), Some(&99_998));
        drop(list);
    }

    #[test]
    fn round_robin() {
        // Every third player leaves until one is left.
        let mut players: CircularList<&str> = ["ana", "beto", "carla", "dani", "eva"]
            .into_iter()
            .collect();
        let mut out = Vec::new();

        while players.len() > 1 {
            players.rotate(2);
            out.extend(players.pop_front());
        }

        assert_eq!(out, vec!["carla", "ana", "eva", "beto"]);
        assert_eq!(players.front(), Some(&"dani"));
    }
}
