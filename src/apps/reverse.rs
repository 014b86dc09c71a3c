use crate::stack::Stack;

/// Reverses `text` by pushing every character and popping them back.
pub fn reverse(text: &str) -> String {
    let mut stack: Stack<char> = text.chars().collect();
    let mut reversed = String::with_capacity(text.len());

    while let Some(c) = stack.pop() {
        reversed.push(c);
    }

    reversed
}
