//! CLI for openurl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use openurl_core::config;
use openurl_core::notice::Locale;

use commands::{run_completions, run_man, run_normalize, run_open, run_shell_stdio, run_view};

/// Top-level CLI: an address prompt that opens pages in a viewer.
#[derive(Debug, Parser)]
#[command(name = "openurl")]
#[command(about = "openurl: type an address, view the page", long_about = None)]
pub struct Cli {
    /// Language for notices (overrides the config file).
    #[arg(long, global = true, value_name = "LOCALE")]
    pub locale: Option<Locale>,

    /// Defaults to the interactive shell.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Interactive shell: entry prompt, then the viewer.
    Shell,

    /// Print the canonical form of an address.
    Normalize {
        /// Address or host text, e.g. "naver.com".
        input: String,
    },

    /// Normalize an address, open it in the viewer and print the page summary.
    Open {
        /// Address or host text, e.g. "naver.com".
        input: String,
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Open the viewer directly on an absolute URL (or the fallback address).
    View {
        /// Absolute URL; the configured fallback address when omitted.
        url: Option<String>,
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the roff man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let locale = cli.locale.unwrap_or(cfg.locale);

        match cli.command.unwrap_or(CliCommand::Shell) {
            CliCommand::Shell => run_shell_stdio(&cfg, locale)?,
            CliCommand::Normalize { input } => run_normalize(&input, locale)?,
            CliCommand::Open { input, json } => run_open(&cfg, locale, &input, json)?,
            CliCommand::View { url, json } => run_view(&cfg, url.as_deref(), json)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
