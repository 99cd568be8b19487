//! `openurl shell` – interactive entry prompt and viewer.
//!
//! Each line is handled to completion before the next one is read. On the
//! entry screen a line is an address; on the viewer screen it is a command.

use anyhow::Result;
use openurl_core::config::OpenUrlConfig;
use openurl_core::nav::{Navigator, Transition};
use openurl_core::normalize;
use openurl_core::notice::{Locale, Notice};
use openurl_core::surface::{CurlSurface, Surface};
use openurl_core::viewer::{Viewer, ViewerOptions};
use std::io::{self, BufRead, Write};

use super::render::write_state;

const VIEWER_HELP: &str = "Commands: :back, :reload, :go <address>, :prev, :next, :quit";

/// A line typed while the viewer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand<'a> {
    /// Default back action: close the viewer, return to entry.
    Back,
    Reload,
    /// Open another address inside the viewer.
    Go(&'a str),
    /// Back gesture inside the viewer.
    Prev,
    /// Forward gesture inside the viewer.
    Next,
    Quit,
    Help,
    Unknown(&'a str),
}

impl<'a> ViewerCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        match cmd {
            ":back" | ":b" => ViewerCommand::Back,
            ":reload" | ":r" => ViewerCommand::Reload,
            ":go" | ":g" if !arg.is_empty() => ViewerCommand::Go(arg),
            ":prev" | "<" => ViewerCommand::Prev,
            ":next" | ">" => ViewerCommand::Next,
            ":quit" | ":q" => ViewerCommand::Quit,
            "" | ":help" | "?" => ViewerCommand::Help,
            _ => ViewerCommand::Unknown(line),
        }
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), ":quit" | ":q")
}

/// Runs the shell over arbitrary input/output until EOF or `:quit`.
pub fn run_shell<R, W, S>(
    input: &mut R,
    out: &mut W,
    surface: &mut S,
    options: ViewerOptions,
    locale: Locale,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: Surface + ?Sized,
{
    let mut nav = Navigator::new();
    let mut viewer: Option<Viewer> = None;
    let mut line = String::new();

    loop {
        write!(out, "{}> ", nav.current().name())?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let text = line.trim_end_matches(['\r', '\n']);

        let Some(v) = viewer.as_mut() else {
            if is_quit(text) {
                break;
            }
            match nav.submit(text) {
                Transition::Pushed(url) => {
                    let mut opened = Viewer::new(url, options);
                    if opened.is_loading() {
                        writeln!(out, "Loading {}...", opened.current_url())?;
                    }
                    write_state(out, opened.load(surface))?;
                    viewer = Some(opened);
                }
                Transition::Rejected(_) => writeln!(out, "{}", Notice::invalid_url(locale))?,
                Transition::Popped | Transition::Ignored => {}
            }
            continue;
        };

        match ViewerCommand::parse(text) {
            ViewerCommand::Back => {
                nav.back();
                viewer = None;
            }
            ViewerCommand::Reload => write_state(out, v.reload(surface))?,
            ViewerCommand::Go(target) => match normalize::normalize(Some(target)) {
                Ok(url) => write_state(out, v.follow(url, surface))?,
                Err(_) => writeln!(out, "{}", Notice::invalid_url(locale))?,
            },
            ViewerCommand::Prev => {
                if v.go_back(surface) {
                    write_state(out, v.state())?;
                } else {
                    writeln!(out, "No earlier page.")?;
                }
            }
            ViewerCommand::Next => {
                if v.go_forward(surface) {
                    write_state(out, v.state())?;
                } else {
                    writeln!(out, "No later page.")?;
                }
            }
            ViewerCommand::Quit => break,
            ViewerCommand::Help => writeln!(out, "{VIEWER_HELP}")?,
            ViewerCommand::Unknown(cmd) => writeln!(out, "Unknown command {cmd:?}. {VIEWER_HELP}")?,
        }
    }

    Ok(())
}

/// Shell on stdin/stdout with the curl surface.
pub fn run_shell_stdio(cfg: &OpenUrlConfig, locale: Locale) -> Result<()> {
    let mut surface = CurlSurface::new(&cfg.viewer);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    writeln!(out, "Open URL (type :quit to exit)")?;
    run_shell(
        &mut input,
        &mut out,
        &mut surface,
        cfg.viewer.options(),
        locale,
    )
}
