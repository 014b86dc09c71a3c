use crate::{container::LinearContainer, vec::Vector};

/// LIFO container backed by a [`Vector`]. The top of the stack is the end
/// of the vector, so push and pop are amortised O(1).
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elems: Vector<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            elems: Vector::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Stack {
            elems: Vector::with_capacity(cap),
        }
    }

    pub fn push(&mut self, elem: T) {
        self.elems.push(elem);
    }

    /// Removes the top element and returns it.
    pub fn pop(&mut self) -> Option<T> {
        self.elems.pop()
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elems.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.elems.last_mut()
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

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.elems.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Bottom to top, like the way it was built.
        f.debug_struct("Stack")
            .field("elems", &self.elems)
            .field("top", &self.peek())
            .finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> LinearContainer<T> for Stack<T> {
    fn put(&mut self, elem: T) {
        self.push(elem);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        Stack::peek(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn clear(&mut self) {
        Stack::clear(self);
    }
}

/// Stack that also answers "what is the smallest element?" in O(1).
///
/// A second stack keeps the running minima: a value is pushed onto it when
/// it is `<=` the current minimum and popped from it when the value leaving
/// the main stack equals that minimum.
#[derive(Debug, Clone)]
pub struct MinStack<T> {
    elems: Stack<T>,
    mins: Stack<T>,
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        MinStack {
            elems: Stack::new(),
            mins: Stack::new(),
        }
    }

    pub fn push(&mut self, elem: T) {
        let is_min = match self.mins.peek() {
            None => true,
            Some(min) => elem <= *min,
        };
        if is_min {
            self.mins.push(elem.clone());
        }
        self.elems.push(elem);
    }

    pub fn pop(&mut self) -> Option<T> {
        let elem = self.elems.pop()?;
        if self.mins.peek() == Some(&elem) {
            self.mins.pop();
        }
        Some(elem)
    }

    pub fn peek(&self) -> Option<&T> {
        self.elems.peek()
    }

    /// Smallest element currently on the stack.
    pub fn min(&self) -> Option<&T> {
        self.mins.peek()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
