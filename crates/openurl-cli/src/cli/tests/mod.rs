//! CLI parse, shell and command tests.

use super::{Cli, CliCommand};
use clap::Parser;
use openurl_core::surface::{PageSummary, Surface};
use url::Url;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn parse_command(args: &[&str]) -> CliCommand {
    parse(args).command.expect("subcommand")
}

/// Answers every load with a 200 page titled after the host.
#[derive(Default)]
pub(super) struct FakeSurface {
    pub loads: Vec<String>,
}

impl Surface for FakeSurface {
    fn load(&mut self, url: &Url) -> anyhow::Result<PageSummary> {
        self.loads.push(url.to_string());
        Ok(PageSummary {
            requested_url: url.clone(),
            final_url: url.clone(),
            status: 200,
            content_type: Some("text/html".to_string()),
            title: Some(format!("Page at {}", url.host_str().unwrap_or("?"))),
            body_bytes: 42,
            truncated: false,
        })
    }
}

mod shell;
