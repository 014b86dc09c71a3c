use crate::{container::LinearContainer, vec::Vector};

/// Binary max-heap stored level by level in a [`Vector`].
///
/// The greatest element comes out first. Wrap elements in
/// [`std::cmp::Reverse`] for smallest-first order.
#[derive(Clone)]
pub struct PriorityQueue<T> {
    heap: Vector<T>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue { heap: Vector::new() }
    }

    pub fn push(&mut self, elem: T) {
        self.heap.push(elem);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes the greatest element.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        let top = self.heap.pop();
        self.sift_down(0);
        top
    }

    /// The greatest element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Consumes the queue and returns its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(elem) = self.pop() {
            out.push(elem);
        }
        out.reverse();
        out
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx] <= self.heap[parent] {
                break;
            }
            self.heap.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();

        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut largest = idx;

            if left < len && self.heap[left] > self.heap[largest] {
                largest = left;
            }
            if right < len && self.heap[right] > self.heap[largest] {
                largest = right;
            }
            if largest == idx {
                break;
            }

            self.heap.swap(idx, largest);
            idx = largest;
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        for elem in iter {
            queue.push(elem);
        }
        queue
    }
}

impl<T: Ord> LinearContainer<T> for PriorityQueue<T> {
    fn put(&mut self, elem: T) {
        self.push(elem);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn clear(&mut self) {
        PriorityQueue::clear(self);
    }
}
