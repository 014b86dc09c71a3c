use tracing::trace;

use crate::stack::Stack;

/// Append-only text buffer with undo and redo. Each stack holds whole
/// snapshots of the content.
#[derive(Debug, Default)]
pub struct TextEditor {
    content: String,
    undo: Stack<String>,
    redo: Stack<String>,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.undo.push(self.content.clone());
        self.content.push_str(text);
        self.redo.clear();
        trace!(len = self.content.len(), "write");
    }

    /// Restores the content before the last write. Returns `false` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.content, previous);
                self.redo.push(current);
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone write. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.content, next);
                self.undo.push(current);
                true
            }
            None => false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
