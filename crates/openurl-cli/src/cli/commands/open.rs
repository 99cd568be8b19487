//! `openurl open <input>` – entry submit, then one viewer load.

use anyhow::Result;
use openurl_core::config::OpenUrlConfig;
use openurl_core::nav::{Navigator, Transition};
use openurl_core::notice::{Locale, Notice};
use openurl_core::surface::{CurlSurface, Surface};
use openurl_core::viewer::{LoadState, Viewer};

use super::render::print_loaded;

/// Submits `input` on a fresh navigator and loads the resulting viewer once.
pub fn open_page<S: Surface + ?Sized>(
    cfg: &OpenUrlConfig,
    locale: Locale,
    input: &str,
    surface: &mut S,
    announce: bool,
) -> Result<LoadState> {
    let mut nav = Navigator::new();
    let url = match nav.submit(input) {
        Transition::Pushed(url) => url,
        Transition::Rejected(_) => anyhow::bail!("{}", Notice::invalid_url(locale)),
        Transition::Popped | Transition::Ignored => anyhow::bail!("navigation did not happen"),
    };

    let mut viewer = Viewer::new(url, cfg.viewer.options());
    if viewer.is_loading() && announce {
        eprintln!("Loading {}...", viewer.current_url());
    }
    Ok(viewer.load(surface).clone())
}

pub fn run_open(cfg: &OpenUrlConfig, locale: Locale, input: &str, json: bool) -> Result<()> {
    let mut surface = CurlSurface::new(&cfg.viewer);
    let state = open_page(cfg, locale, input, &mut surface, !json)?;
    print_loaded(&state, json)
}
