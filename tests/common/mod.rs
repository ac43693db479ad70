//! Shared helpers for integration tests: a loopback HTTP stub standing in for
//! the prediction service, and a runner for the `premium` binary.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Stub service answering a fixed script of replies, one per connection.
pub struct StubServer {
    pub endpoint: String,
    handle: JoinHandle<Vec<CapturedRequest>>,
}

impl StubServer {
    /// Serve `replies` in order, then stop accepting.
    pub fn start(replies: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let port = listener.local_addr().expect("stub addr").port();
        let handle = thread::spawn(move || {
            let mut captured = Vec::new();
            for (status, body) in replies {
                let (stream, _) = listener.accept().expect("accept");
                captured.push(handle_connection(stream, status, &body));
            }
            captured
        });
        Self {
            endpoint: format!("http://127.0.0.1:{port}/predict"),
            handle,
        }
    }

    /// Wait for the script to finish and return what was received.
    pub fn finish(self) -> Vec<CapturedRequest> {
        self.handle.join().expect("stub thread panicked")
    }
}

fn handle_connection(stream: TcpStream, status: u16, body: &str) -> CapturedRequest {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            match name.to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().unwrap_or(0),
                "content-type" => content_type = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let mut request_body = vec![0u8; content_length];
    reader.read_exact(&mut request_body).expect("request body");

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let reply = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = stream;
    stream.write_all(reply.as_bytes()).expect("write reply");
    stream.flush().expect("flush reply");

    CapturedRequest {
        method,
        path,
        content_type,
        body: String::from_utf8(request_body).expect("utf8 body"),
    }
}

/// An endpoint on a port nothing listens on.
pub fn unreachable_endpoint() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
        listener.local_addr().expect("probe addr").port()
    };
    format!("http://127.0.0.1:{port}/predict")
}

/// Run the `premium` binary with colors off and no ambient config.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_premium"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("PREMIUM_PREDICTOR_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn premium binary")
}

pub const LOW_BODY: &str = r#"{"response":{"predicted_category":"low","confidence":0.82,"class_probabilities":{"low":0.82,"medium":0.12,"high":0.06}}}"#;
