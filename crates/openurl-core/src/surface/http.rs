//! libcurl-backed surface.

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

use super::{extract_title, PageSummary, Surface};
use crate::config::ViewerConfig;

const MAX_REDIRECTS: u32 = 10;

/// Loads pages with a blocking libcurl GET on the calling thread.
#[derive(Debug, Clone)]
pub struct CurlSurface {
    connect_timeout: Duration,
    timeout: Duration,
    max_body_bytes: usize,
    user_agent: Option<String>,
}

impl CurlSurface {
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_body_bytes: cfg.max_body_bytes,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Surface for CurlSurface {
    /// Any HTTP status counts as a loaded page; only transfer failures are errors.
    /// Bodies longer than `max_body_bytes` are cut off and the transfer stopped.
    fn load(&mut self, url: &Url) -> Result<PageSummary> {
        let mut body: Vec<u8> = Vec::new();
        let cap = self.max_body_bytes;

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str()).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(agent) = &self.user_agent {
            easy.useragent(agent)?;
        }

        let mut truncated = false;
        let outcome = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                let room = cap.saturating_sub(body.len());
                let take = data.len().min(room);
                body.extend_from_slice(&data[..take]);
                // A short count makes curl abort the transfer.
                if take < data.len() {
                    truncated = true;
                }
                Ok(take)
            })?;
            transfer.perform()
        };
        match outcome {
            Ok(()) => {}
            // Aborted by the body cap: what arrived so far is the page.
            Err(err) if err.is_write_error() && truncated => {
                tracing::debug!(url = %url, cap, "body cap reached, transfer stopped");
            }
            Err(err) => {
                return Err(anyhow::Error::new(err).context(format!("GET {} failed", url)));
            }
        }

        let status = easy.response_code().context("no response code")?;
        let content_type = easy.content_type()?.map(str::to_string);
        let final_url = easy
            .effective_url()?
            .and_then(|u| Url::parse(u).ok())
            .unwrap_or_else(|| url.clone());

        let looks_html = content_type
            .as_deref()
            .map_or(true, |ct| ct.to_ascii_lowercase().contains("html"));
        let title = if looks_html {
            extract_title(&String::from_utf8_lossy(&body))
        } else {
            None
        };

        tracing::debug!(
            url = %url,
            final_url = %final_url,
            status,
            bytes = body.len(),
            truncated,
            "page loaded"
        );

        Ok(PageSummary {
            requested_url: url.clone(),
            final_url,
            status,
            content_type,
            title,
            body_bytes: body.len(),
            truncated,
        })
    }
}
