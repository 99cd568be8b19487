//! Screen navigation: an entry screen at the root and a viewer pushed on top.
//!
//! The navigator is a small stack driven by [`Event`]s through the pure
//! [`transition`] function. Entry is never popped; at most one viewer sits
//! above it.

use url::Url;

use crate::normalize::InvalidUrl;
use crate::request::NavigationRequest;

/// A view the navigator can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Address entry form (initial screen).
    Entry,
    /// Page viewer; its single parameter is the normalized URL.
    Viewer { url: Url },
}

impl Screen {
    /// Display name used for headers and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Entry => "Home",
            Screen::Viewer { .. } => "Browser",
        }
    }
}

/// User input the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Submit action (button or keyboard "go") with the current field text.
    Submit(&'a str),
    /// Default back action of the hosting shell.
    Back,
}

/// Outcome of applying an [`Event`] to the current [`Screen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Viewer pushed with this URL.
    Pushed(Url),
    /// Submission rejected; the entry screen stays current.
    Rejected(InvalidUrl),
    /// Viewer popped; entry is current again.
    Popped,
    /// Event has no meaning on the current screen.
    Ignored,
}

/// Decides what `event` does on `current` without touching any state.
pub fn transition(current: &Screen, event: Event<'_>) -> Transition {
    match (current, event) {
        (Screen::Entry, Event::Submit(raw)) => {
            let mut request = NavigationRequest::new(raw);
            match request.resolve() {
                Ok(url) => Transition::Pushed(url.clone()),
                Err(err) => Transition::Rejected(err),
            }
        }
        (Screen::Viewer { .. }, Event::Back) => Transition::Popped,
        (Screen::Entry, Event::Back) | (Screen::Viewer { .. }, Event::Submit(_)) => {
            Transition::Ignored
        }
    }
}

/// Two-level screen stack with [`Screen::Entry`] at the root.
#[derive(Debug)]
pub struct Navigator {
    root: Screen,
    pushed: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            root: Screen::Entry,
            pushed: Vec::new(),
        }
    }

    pub fn current(&self) -> &Screen {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// URL of the current viewer, if one is showing.
    pub fn current_url(&self) -> Option<&Url> {
        match self.current() {
            Screen::Viewer { url } => Some(url),
            Screen::Entry => None,
        }
    }

    /// Number of screens on the stack (1 on entry).
    pub fn depth(&self) -> usize {
        1 + self.pushed.len()
    }

    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Applies `event` and updates the stack accordingly.
    pub fn dispatch(&mut self, event: Event<'_>) -> Transition {
        let outcome = transition(self.current(), event);
        match &outcome {
            Transition::Pushed(url) => {
                tracing::debug!(url = %url, "navigate to viewer");
                self.pushed.push(Screen::Viewer { url: url.clone() });
            }
            Transition::Popped => {
                tracing::debug!("back to entry");
                self.pushed.pop();
            }
            Transition::Rejected(err) => {
                tracing::debug!(input = %err.input, "rejected submission: {}", err.kind);
            }
            Transition::Ignored => {
                tracing::trace!(screen = self.current().name(), "event ignored");
            }
        }
        outcome
    }

    pub fn submit(&mut self, raw: &str) -> Transition {
        self.dispatch(Event::Submit(raw))
    }

    pub fn back(&mut self) -> Transition {
        self.dispatch(Event::Back)
    }
}
