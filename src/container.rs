//! The contract shared by the linear containers.
//!
//! Every container decides on its own which element `take` hands back:
//!
//! | container                               | discipline               |
//! |-----------------------------------------|--------------------------|
//! | [`Stack`](crate::Stack)                 | LIFO                     |
//! | [`Queue`](crate::Queue)                 | FIFO                     |
//! | [`Deque`](crate::Deque)                 | FIFO (back in, front out)|
//! | [`PriorityQueue`](crate::PriorityQueue) | greatest element first   |

/// A linear container with a single insertion point and a single removal
/// point.
pub trait LinearContainer<T> {
    /// Inserts `elem` according to the container's discipline.
    fn put(&mut self, elem: T);

    /// Removes the next element, or `None` if the container is empty.
    fn take(&mut self) -> Option<T>;

    /// The element the next [`take`](LinearContainer::take) would return.
    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self) {
        while self.take().is_some() {}
    }

    /// Takes every element out in discipline order.
    fn drain_all(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(elem) = self.take() {
            out.push(elem);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::LinearContainer;
    use crate::{Deque, PriorityQueue, Queue, Stack};

    fn fill<C: LinearContainer<i32>>(mut c: C) -> C {
        for n in [3, 1, 4, 1, 5] {
            c.put(n);
        }
        c
    }

    #[test]
    fn disciplines() {
        assert_eq!(fill(Stack::new()).drain_all(), vec![5, 1, 4, 1, 3]);
        assert_eq!(fill(Queue::new()).drain_all(), vec![3, 1, 4, 1, 5]);
        assert_eq!(fill(Deque::new()).drain_all(), vec![3, 1, 4, 1, 5]);
        assert_eq!(fill(PriorityQueue::new()).drain_all(), vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn peek_agrees_with_take() {
        let mut containers: Vec<Box<dyn LinearContainer<i32>>> = vec![
            Box::new(fill(Stack::new())),
            Box::new(fill(Queue::new())),
            Box::new(fill(Deque::new())),
            Box::new(fill(PriorityQueue::new())),
        ];

        for c in containers.iter_mut() {
            while !c.is_empty() {
                let peeked = c.peek().copied();
                assert_eq!(peeked, c.take());
            }
            assert_eq!(c.peek(), None);
            assert_eq!(c.take(), None);
        }
    }

    #[test]
    fn clear_empties() {
        let mut q = fill(Queue::new());
        LinearContainer::clear(&mut q);
        assert!(LinearContainer::is_empty(&q));
    }
}
