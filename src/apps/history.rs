use tracing::debug;

use crate::{
    error::{AdtError, Result},
    stack::Stack,
};

/// Back/forward navigation with two stacks.
///
/// Visiting a page pushes the current one onto the back stack and forgets
/// everything that was reachable with "forward".
#[derive(Debug, Default)]
pub struct BrowserHistory {
    back: Stack<String>,
    forward: Stack<String>,
    current: Option<String>,
}

impl BrowserHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, url: impl Into<String>) {
        let url = url.into();
        debug!(%url, "visit");

        if let Some(current) = self.current.take() {
            self.back.push(current);
        }
        self.current = Some(url);
        self.forward.clear();
    }

    /// Goes to the previous page and returns it.
    pub fn back(&mut self) -> Result<&str> {
        let previous = self.back.pop().ok_or(AdtError::NoHistory("previous"))?;

        if let Some(current) = self.current.take() {
            self.forward.push(current);
        }
        debug!(url = %previous, "back");

        Ok(self.current.insert(previous).as_str())
    }

    /// Goes to the next page and returns it.
    pub fn forward(&mut self) -> Result<&str> {
        let next = self.forward.pop().ok_or(AdtError::NoHistory("next"))?;

        if let Some(current) = self.current.take() {
            self.back.push(current);
        }
        debug!(url = %next, "forward");

        Ok(self.current.insert(next).as_str())
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}
