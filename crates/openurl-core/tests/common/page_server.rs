//! Minimal HTTP/1.1 server serving a few fixed pages for integration tests.
//!
//! Routes:
//! - `/` 200 HTML titled "Hello openurl"
//! - `/moved` 302 redirect to `/`
//! - `/plain` 200 text/plain whose body happens to contain a title tag
//! - `/big` 200 HTML titled "Big" whose body never ends
//! - `/ua` 200 HTML titled with the request's User-Agent
//! - anything else 404 HTML titled "Not Found"

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Starts the server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    if path == "/big" {
        stream_forever(stream);
        return;
    }
    let user_agent = request
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("user-agent")
                .then(|| value.trim().to_string())
        })
        .unwrap_or_default();
    let ua_page = format!("<html><head><title>UA: {}</title></head></html>", user_agent);

    let (status, extra, content_type, body) = match path {
        "/" => (
            "200 OK",
            String::new(),
            "text/html; charset=utf-8",
            "<html><head><title>Hello openurl</title></head><body>hi</body></html>",
        ),
        "/moved" => (
            "302 Found",
            "Location: /\r\n".to_string(),
            "text/html",
            "",
        ),
        "/plain" => (
            "200 OK",
            String::new(),
            "text/plain",
            "<title>not html</title>",
        ),
        "/ua" => (
            "200 OK",
            String::new(),
            "text/html",
            ua_page.as_str(),
        ),
        _ => (
            "404 Not Found",
            String::new(),
            "text/html",
            "<title>Not Found</title>",
        ),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        extra,
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Sends a titled head, then filler until the client hangs up.
fn stream_forever(mut stream: std::net::TcpStream) {
    let head = "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n\
                <html><head><title>Big</title></head><body>";
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }
    let filler = [b'x'; 16 * 1024];
    while stream.write_all(&filler).is_ok() {}
}
