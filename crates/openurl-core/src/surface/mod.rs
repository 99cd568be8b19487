//! Page surface: the component that actually fetches and renders an address.
//!
//! The viewer only depends on the [`Surface`] trait. [`CurlSurface`] is the
//! default implementation: a libcurl GET that follows redirects and reports
//! a short summary of the page instead of drawing it.

mod http;
mod title;

pub use http::CurlSurface;
pub use title::extract_title;

use serde::Serialize;
use url::Url;

/// What a surface reports after loading a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Address the viewer asked for.
    pub requested_url: Url,
    /// Address after redirects.
    pub final_url: Url,
    /// HTTP status of the final response.
    pub status: u32,
    /// `Content-Type` of the final response, if any.
    pub content_type: Option<String>,
    /// Text of the document's `<title>`, if it is HTML and has one.
    pub title: Option<String>,
    /// Body bytes kept (bounded by the surface's body limit).
    pub body_bytes: usize,
    /// True if the body was cut off at the surface's body limit.
    pub truncated: bool,
}

impl PageSummary {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn was_redirected(&self) -> bool {
        self.final_url != self.requested_url
    }
}

/// Something that can load a URL for the viewer.
pub trait Surface {
    fn load(&mut self, url: &Url) -> anyhow::Result<PageSummary>;
}
