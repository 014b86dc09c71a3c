use crate::{container::LinearContainer, list::DoublyLinkedList};

/// Double-ended queue on top of a [`DoublyLinkedList`].
///
/// As a [`LinearContainer`] it behaves like a queue: `put` pushes at the
/// back and `take` pops from the front.
#[derive(Clone, PartialEq)]
pub struct Deque<T> {
    elems: DoublyLinkedList<T>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Deque {
            elems: DoublyLinkedList::new(),
        }
    }

    pub fn push_front(&mut self, elem: T) {
        self.elems.push_front(elem);
    }

    pub fn push_back(&mut self, elem: T) {
        self.elems.push_back(elem);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.elems.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.elems.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.elems.front()
    }

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

    pub fn iter(&self) -> crate::list::doubly::Iter<'_, T> {
        self.elems.iter()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Deque").field(&self.elems).finish()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<T> LinearContainer<T> for Deque<T> {
    fn put(&mut self, elem: T) {
        self.push_back(elem);
    }

    fn take(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.front()
    }

    fn len(&self) -> usize {
        Deque::len(self)
    }

    fn clear(&mut self) {
        Deque::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::Deque;

    #[test]
    fn both_ends() {
        let mut deque = Deque::new();
        assert_eq!(deque.pop_front(), None);
        assert_eq!(deque.pop_back(), None);

        deque.push_back(2);
        deque.push_back(3);
        deque.push_front(1);
        deque.push_front(0);
        assert_eq!(deque.len(), 4);
        assert_eq!(deque.front(), Some(&0));
        assert_eq!(deque.back(), Some(&3));

        assert_eq!(deque.pop_back(), Some(3));
        assert_eq!(deque.pop_front(), Some(0));
        assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), vec![2, 1]);

        deque.clear();
        assert!(deque.is_empty());
    }

    #[test]
    fn sliding_window_maximum() {
        // Indices in the deque keep their values in decreasing order.
        let values = [1, 3, -1, -3, 5, 3, 6, 7];
        let k = 3;
        let mut window: Deque<usize> = Deque::new();
        let mut maxima = Vec::new();

        for (i, &v) in values.iter().enumerate() {
            while window.front().is_some_and(|&j| j + k <= i) {
                window.pop_front();
            }
            while window.back().is_some_and(|&j| values[j] <= v) {
                window.pop_back();
            }
            window.push_back(i);
            if i + 1 >= k {
                maxima.extend(window.front().map(|&j| values[j]));
            }
        }

        assert_eq!(maxima, vec![3, 3, 5, 5, 6, 7]);
    }
}
