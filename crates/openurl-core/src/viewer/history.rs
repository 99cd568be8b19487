//! Back/forward history of pages visited inside one viewer.

use url::Url;

#[derive(Debug, Clone)]
pub struct SurfaceHistory {
    back_stack: Vec<Url>,
    current: Url,
    forward_stack: Vec<Url>,
}

impl SurfaceHistory {
    pub fn new(start: Url) -> Self {
        Self {
            back_stack: Vec::new(),
            current: start,
            forward_stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &Url {
        &self.current
    }

    /// Moves to `url`, pushing the current page onto the back stack and
    /// clearing forward history.
    pub fn visit(&mut self, url: Url) {
        let prev = std::mem::replace(&mut self.current, url);
        self.back_stack.push(prev);
        self.forward_stack.clear();
    }

    /// Steps back. Returns the new current URL, or `None` at the first page.
    pub fn go_back(&mut self) -> Option<&Url> {
        let prev = self.back_stack.pop()?;
        let cur = std::mem::replace(&mut self.current, prev);
        self.forward_stack.push(cur);
        Some(&self.current)
    }

    /// Steps forward. Returns the new current URL, or `None` at the newest page.
    pub fn go_forward(&mut self) -> Option<&Url> {
        let next = self.forward_stack.pop()?;
        let cur = std::mem::replace(&mut self.current, next);
        self.back_stack.push(cur);
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Total number of entries, current included.
    pub fn entry_count(&self) -> usize {
        self.back_stack.len() + 1 + self.forward_stack.len()
    }
}
