//! Text and JSON output for viewer states.

use anyhow::Result;
use openurl_core::surface::PageSummary;
use openurl_core::viewer::LoadState;
use std::io::Write;

pub fn write_summary<W: Write>(out: &mut W, summary: &PageSummary) -> Result<()> {
    writeln!(out, "{:<8} {}", "URL", summary.final_url)?;
    if summary.was_redirected() {
        writeln!(out, "{:<8} {}", "FROM", summary.requested_url)?;
    }
    writeln!(out, "{:<8} {}", "STATUS", summary.status)?;
    writeln!(
        out,
        "{:<8} {}",
        "TYPE",
        summary.content_type.as_deref().unwrap_or("-")
    )?;
    writeln!(out, "{:<8} {}", "TITLE", summary.title.as_deref().unwrap_or("-"))?;
    if summary.truncated {
        writeln!(out, "{:<8} {} (truncated)", "BYTES", summary.body_bytes)?;
    }
    Ok(())
}

pub fn write_summary_json<W: Write>(out: &mut W, summary: &PageSummary) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the viewer state the way the shell shows it.
pub fn write_state<W: Write>(out: &mut W, state: &LoadState) -> Result<()> {
    match state {
        LoadState::Idle => writeln!(out, "(nothing loaded)")?,
        LoadState::Loading => writeln!(out, "Loading...")?,
        LoadState::Loaded(summary) => write_summary(out, summary)?,
        LoadState::Failed(msg) => writeln!(out, "Could not load page: {msg}")?,
    }
    Ok(())
}

/// Prints a loaded page to stdout (text or JSON); a failed load becomes an error.
pub fn print_loaded(state: &LoadState, json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match state {
        LoadState::Loaded(summary) if json => write_summary_json(&mut out, summary),
        LoadState::Loaded(summary) => write_summary(&mut out, summary),
        LoadState::Failed(msg) => anyhow::bail!("could not load page: {msg}"),
        LoadState::Idle | LoadState::Loading => anyhow::bail!("page was not loaded"),
    }
}
