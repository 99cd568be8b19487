//! `openurl normalize <input>` – print the canonical URL.

use anyhow::Result;
use openurl_core::normalize;
use openurl_core::notice::{Locale, Notice};

pub fn run_normalize(input: &str, locale: Locale) -> Result<()> {
    match normalize::normalize_str(input) {
        Ok(url) => {
            println!("{url}");
            Ok(())
        }
        Err(err) => {
            tracing::debug!("normalize rejected: {}", err);
            anyhow::bail!("{}", Notice::invalid_url(locale))
        }
    }
}
