//! Local one-shot HTTP responder for tests.
use crossbeam_channel::{Receiver, unbounded};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serve exactly one HTTP response on a local port; returns the base URL and the raw request.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let size = stream.read(&mut buf).unwrap();
            if size == 0 {
                break;
            }
            request.extend_from_slice(&buf[..size]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
    });

    (base_url, rx)
}
