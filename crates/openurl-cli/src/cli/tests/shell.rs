//! Tests for the interactive shell, driven with in-memory input and a fake surface.

use super::FakeSurface;
use crate::cli::commands::{run_shell, ViewerCommand};
use openurl_core::notice::Locale;
use openurl_core::viewer::ViewerOptions;
use std::io::Cursor;

fn run(script: &str, locale: Locale, options: ViewerOptions) -> (String, Vec<String>) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out: Vec<u8> = Vec::new();
    let mut surface = FakeSurface::default();
    run_shell(&mut input, &mut out, &mut surface, options, locale).unwrap();
    (String::from_utf8(out).unwrap(), surface.loads)
}

#[test]
fn viewer_command_parse() {
    assert_eq!(ViewerCommand::parse(":back"), ViewerCommand::Back);
    assert_eq!(ViewerCommand::parse("  :r "), ViewerCommand::Reload);
    assert_eq!(ViewerCommand::parse(":go  naver.com "), ViewerCommand::Go("naver.com"));
    assert_eq!(ViewerCommand::parse("<"), ViewerCommand::Prev);
    assert_eq!(ViewerCommand::parse(">"), ViewerCommand::Next);
    assert_eq!(ViewerCommand::parse(":q"), ViewerCommand::Quit);
    assert_eq!(ViewerCommand::parse(""), ViewerCommand::Help);
    assert_eq!(ViewerCommand::parse(":go"), ViewerCommand::Unknown(":go"));
    assert_eq!(ViewerCommand::parse("hello"), ViewerCommand::Unknown("hello"));
}

#[test]
fn valid_address_opens_viewer() {
    let (out, loads) = run("naver.com\n:quit\n", Locale::En, ViewerOptions::default());
    assert_eq!(loads, ["https://naver.com/"]);
    assert!(out.contains("Loading https://naver.com/..."));
    assert!(out.contains("Page at naver.com"));
    assert!(out.contains("Browser> "));
}

#[test]
fn invalid_address_shows_notice_and_stays_on_entry() {
    let (out, loads) = run("not a url!! \n:quit\n", Locale::Ko, ViewerOptions::default());
    assert!(loads.is_empty());
    assert!(out.contains("유효하지 않은 URL: 올바른 주소를 입력해 주세요."));
    assert!(!out.contains("Browser> "));
    assert_eq!(out.matches("Home> ").count(), 2);
}

#[test]
fn back_returns_to_entry_and_allows_new_submission() {
    let (out, loads) = run(
        "example.com\n:back\nexample.com\n:quit\n",
        Locale::En,
        ViewerOptions::default(),
    );
    assert_eq!(loads, ["https://example.com/", "https://example.com/"]);
    assert_eq!(out.matches("Browser> ").count(), 2);
}

#[test]
fn go_prev_next_inside_viewer() {
    let (out, loads) = run(
        "a.org\n:go b.org\n<\n>\n>\n:quit\n",
        Locale::En,
        ViewerOptions::default(),
    );
    assert_eq!(
        loads,
        ["https://a.org/", "https://b.org/", "https://a.org/", "https://b.org/"]
    );
    assert!(out.contains("No later page."));
}

#[test]
fn gestures_disabled() {
    let opts = ViewerOptions {
        back_forward_gestures: false,
        ..ViewerOptions::default()
    };
    let (out, loads) = run("a.org\n:go b.org\n<\n:quit\n", Locale::En, opts);
    assert_eq!(loads.len(), 2);
    assert!(out.contains("No earlier page."));
}

#[test]
fn go_with_invalid_address_shows_notice() {
    let (out, loads) = run("a.org\n:go bad host\n:quit\n", Locale::En, ViewerOptions::default());
    assert_eq!(loads.len(), 1);
    assert!(out.contains("Invalid URL: Please enter a valid address."));
}

#[test]
fn no_loading_line_without_loading_state() {
    let opts = ViewerOptions {
        start_in_loading_state: false,
        ..ViewerOptions::default()
    };
    let (out, _) = run("a.org\n", Locale::En, opts);
    assert!(!out.contains("Loading"));
    assert!(out.contains("Page at a.org"));
}

#[test]
fn eof_ends_shell() {
    let (out, loads) = run("", Locale::En, ViewerOptions::default());
    assert!(loads.is_empty());
    assert!(out.starts_with("Home> "));
}

#[test]
fn unknown_viewer_command_prints_help() {
    let (out, _) = run("a.org\nfoo\n:quit\n", Locale::En, ViewerOptions::default());
    assert!(out.contains("Unknown command \"foo\""));
    assert!(out.contains(":reload"));
}
