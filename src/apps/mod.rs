//! Classic problems solved with a stack.

pub mod balance;
pub mod editor;
pub mod expression;
pub mod hanoi;
pub mod history;
pub mod palindrome;
pub mod reverse;

pub use balance::{is_balanced, is_balanced_html, is_balanced_parens};
pub use editor::TextEditor;
pub use expression::{eval_infix, eval_postfix, infix_to_postfix};
pub use hanoi::{Hanoi, Move, Peg};
pub use history::BrowserHistory;
pub use palindrome::is_palindrome;
pub use reverse::reverse;
