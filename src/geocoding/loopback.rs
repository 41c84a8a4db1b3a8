//! One-shot HTTP server on 127.0.0.1 for provider tests.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// How the server answers the single request it accepts.
pub(crate) enum Reply {
    /// Reads the request, then holds the connection open without answering.
    Silent(Duration),
    /// Writes a full response with the given status line and JSON body.
    Json { status: &'static str, body: String },
}

pub(crate) struct OneShotServer {
    pub(crate) addr: SocketAddr,
    head: Receiver<String>,
}

impl OneShotServer {
    /// Accepts one connection on an ephemeral port and answers it with `reply`.
    pub(crate) fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let (tx, head) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut request = String::new();
            loop {
                let mut line = String::new();
                let n = reader.read_line(&mut line).expect("read request");
                if n == 0 || line == "\r\n" {
                    break;
                }
                request.push_str(&line);
            }
            let _ = tx.send(request);

            let mut stream = stream;
            match reply {
                Reply::Silent(hold) => thread::sleep(hold),
                Reply::Json { status, body } => {
                    let response = format!(
                        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes());
                    let _ = stream.flush();
                }
            }
        });

        Self { addr, head }
    }

    /// Request line and headers as received, one per line.
    pub(crate) fn request_head(&self) -> String {
        self.head
            .recv_timeout(Duration::from_secs(5))
            .expect("request received")
    }
}

/// Returns the request line of `head`.
pub(crate) fn request_line(head: &str) -> &str {
    head.lines().next().unwrap_or_default()
}

/// Returns the value of header `name`, matched case-insensitively.
pub(crate) fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then_some(value.trim())
    })
}
