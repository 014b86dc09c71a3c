//! Abstract data types: stacks, queues, deques, priority queues, linked
//! lists, binary search trees and sets, plus the classic problems they solve.

pub mod apps;
pub mod binary_tree;
pub mod cli;
pub mod config;
pub mod container;
pub mod deque;
pub mod error;
pub mod list;
pub mod logger;
pub mod priority_queue;
pub mod queue;
pub mod set;
pub mod stack;
pub mod vec;

pub use binary_tree::BinarySearchTree;
pub use container::LinearContainer;
pub use deque::Deque;
pub use error::{AdtError, Result};
pub use list::{CircularList, DoublyLinkedList, LinkedSequence, SinglyLinkedList};
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use set::Set;
pub use stack::{MinStack, Stack};
pub use vec::Vector;
