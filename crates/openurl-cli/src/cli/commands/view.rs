//! `openurl view [url]` – open the viewer directly.

use anyhow::{Context, Result};
use openurl_core::config::OpenUrlConfig;
use openurl_core::surface::CurlSurface;
use openurl_core::viewer::Viewer;
use url::Url;

use super::render::print_loaded;

pub fn run_view(cfg: &OpenUrlConfig, url: Option<&str>, json: bool) -> Result<()> {
    let param = url
        .map(|u| Url::parse(u).with_context(|| format!("viewer needs an absolute URL, got {u:?}")))
        .transpose()?;
    let fallback = || {
        cfg.fallback()
            .with_context(|| format!("fallback_url {:?} in config", cfg.fallback_url))
    };

    let mut viewer = Viewer::open(param, fallback, cfg.viewer.options())?;
    if viewer.used_fallback() {
        tracing::info!("no url given, showing fallback {}", viewer.current_url());
    }
    if viewer.is_loading() && !json {
        eprintln!("Loading {}...", viewer.current_url());
    }
    let mut surface = CurlSurface::new(&cfg.viewer);
    print_loaded(viewer.load(&mut surface), json)
}
