//! Linked sequences.
//!
//! Three node layouts share the [`LinkedSequence`] traversal contract:
//! [`SinglyLinkedList`] (head plus raw tail pointer), [`DoublyLinkedList`]
//! (nodes linked both ways) and [`CircularList`] (a ring addressed through
//! its tail).

pub mod circular;
pub mod doubly;
pub mod singly;

pub use circular::CircularList;
pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;

/// Operations every linked list in this crate supports.
pub trait LinkedSequence<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_front(&mut self, elem: T);

    fn push_back(&mut self, elem: T);

    fn pop_front(&mut self) -> Option<T>;

    fn front(&self) -> Option<&T>;

    fn back(&self) -> Option<&T>;

    /// Walks the sequence once, front to back.
    fn iter(&self) -> Self::Iter<'_>;

    fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == elem)
    }
}
