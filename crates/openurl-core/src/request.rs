//! Navigation request: one submission of entry text.
//!
//! Created when the user submits, resolved once, then dropped after the
//! navigator has either moved to the viewer or shown a notice.

use url::Url;

use crate::normalize::{self, InvalidUrl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    raw_input: String,
    normalized_url: Option<Url>,
}

impl NavigationRequest {
    pub fn new(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            normalized_url: None,
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// `None` until [`resolve`](Self::resolve) succeeds.
    pub fn normalized_url(&self) -> Option<&Url> {
        self.normalized_url.as_ref()
    }

    /// Runs the normalizer over the raw input and records the result.
    pub fn resolve(&mut self) -> Result<&Url, InvalidUrl> {
        let url = normalize::normalize(Some(&self.raw_input))?;
        Ok(&*self.normalized_url.insert(url))
    }

    /// Consumes the request, yielding the normalized URL if it was resolved.
    pub fn into_normalized_url(self) -> Option<Url> {
        self.normalized_url
    }
}
