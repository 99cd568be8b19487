//! Viewer screen: shows one address through a [`Surface`].
//!
//! The viewer's parameter is the normalized URL handed over by the
//! navigator. Pages reached from inside the viewer go into its own
//! [`SurfaceHistory`], separate from the screen stack.

mod history;

pub use history::SurfaceHistory;

use url::Url;

use crate::surface::{PageSummary, Surface};

/// Behaviour switches for the viewer's surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub start_in_loading_state: bool,
    pub back_forward_gestures: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            start_in_loading_state: true,
            back_forward_gestures: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// A load is about to run or is running.
    Loading,
    Loaded(PageSummary),
    /// The surface could not load the page; the message is for display.
    Failed(String),
}

#[derive(Debug)]
pub struct Viewer {
    history: SurfaceHistory,
    options: ViewerOptions,
    state: LoadState,
    used_fallback: bool,
}

impl Viewer {
    /// Opens a viewer on `url`, the parameter handed over by the navigator.
    pub fn new(url: Url, options: ViewerOptions) -> Self {
        let state = if options.start_in_loading_state {
            LoadState::Loading
        } else {
            LoadState::Idle
        };
        Self {
            history: SurfaceHistory::new(url),
            options,
            state,
            used_fallback: false,
        }
    }

    /// Opens a viewer on `param`, or on the address `fallback` yields when no
    /// URL was passed. `fallback` is only called in that case.
    pub fn open<F, E>(param: Option<Url>, fallback: F, options: ViewerOptions) -> Result<Self, E>
    where
        F: FnOnce() -> Result<Url, E>,
    {
        match param {
            Some(url) => Ok(Self::new(url, options)),
            None => {
                let url = fallback()?;
                tracing::debug!(fallback = %url, "viewer opened without url");
                let mut viewer = Self::new(url, options);
                viewer.used_fallback = true;
                Ok(viewer)
            }
        }
    }

    pub fn current_url(&self) -> &Url {
        self.history.current()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn options(&self) -> ViewerOptions {
        self.options
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// True if the viewer was opened on the fallback address.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn history(&self) -> &SurfaceHistory {
        &self.history
    }

    /// Loads the current history entry. Surface errors end up in
    /// [`LoadState::Failed`].
    pub fn load<S: Surface + ?Sized>(&mut self, surface: &mut S) -> &LoadState {
        self.state = LoadState::Loading;
        let url = self.history.current().clone();
        self.state = match surface.load(&url) {
            Ok(summary) => LoadState::Loaded(summary),
            Err(err) => {
                tracing::warn!(url = %url, "page load failed: {:#}", err);
                LoadState::Failed(format!("{:#}", err))
            }
        };
        &self.state
    }

    pub fn reload<S: Surface + ?Sized>(&mut self, surface: &mut S) -> &LoadState {
        self.load(surface)
    }

    /// Navigates inside the viewer to `url` and loads it.
    pub fn follow<S: Surface + ?Sized>(&mut self, url: Url, surface: &mut S) -> &LoadState {
        self.history.visit(url);
        self.load(surface)
    }

    pub fn can_go_back(&self) -> bool {
        self.options.back_forward_gestures && self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.options.back_forward_gestures && self.history.can_go_forward()
    }

    /// Back gesture. Returns `false` (and loads nothing) when gestures are
    /// disabled or there is no earlier page.
    pub fn go_back<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history.go_back();
        self.load(surface);
        true
    }

    /// Forward gesture; see [`go_back`](Self::go_back).
    pub fn go_forward<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.history.go_forward();
        self.load(surface);
        true
    }
}
