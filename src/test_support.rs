// Canned HTTP/1.1 responder for tests. One response per connection, then close.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

use reqwest::blocking::Client;

use crate::config::StoreConfig;

#[derive(Clone)]
struct Canned {
    status: u16,
    body: Vec<u8>,
    /// Advertised length; larger than `body` simulates a dropped connection.
    content_length: usize,
}

type Routes = Arc<Mutex<HashMap<String, Canned>>>;

pub struct TestServer {
    base_url: String,
    routes: Routes,
}

impl TestServer {
    /// Routes are `(path, status, body)`. Unknown paths answer 404.
    pub fn start(routes: Vec<(&str, u16, Vec<u8>)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = Self {
            base_url: format!("http://{}", addr),
            routes: Arc::new(Mutex::new(HashMap::new())),
        };
        for (path, status, body) in routes {
            server.route(path, status, body);
        }

        let routes = Arc::clone(&server.routes);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let routes = Arc::clone(&routes);
                thread::spawn(move || respond(stream, &routes));
            }
        });

        server
    }

    /// Add or replace a route after start, for pages that link back to this server.
    pub fn route(&self, path: &str, status: u16, body: Vec<u8>) {
        let content_length = body.len();
        self.insert(path, Canned { status, body, content_length });
    }

    /// 200 response that promises `content_length` bytes but closes after `body`.
    pub fn route_truncated(&self, path: &str, body: Vec<u8>, content_length: usize) {
        self.insert(path, Canned { status: 200, body, content_length });
    }

    fn insert(&self, path: &str, canned: Canned) {
        self.routes.lock().unwrap().insert(path.to_string(), canned);
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn store_config(&self, base_dir: impl AsRef<Path>) -> StoreConfig {
        StoreConfig {
            sticker_url_template: self.url("/stickershop/product/{}/ja"),
            emoji_url_template: self.url("/emojishop/product/{}/ja"),
            ..StoreConfig::default()
        }
        .with_base_dir(base_dir.as_ref())
    }
}

fn respond(stream: TcpStream, routes: &Routes) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain headers.
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let canned = routes.lock().unwrap().get(path).cloned().unwrap_or(Canned {
        status: 404,
        body: b"not found".to_vec(),
        content_length: 9,
    });

    let mut stream = reader.into_inner();
    let head = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        canned.status, canned.content_length
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&canned.body);
    let _ = stream.flush();
}

/// Client that never goes through an environment proxy.
pub fn test_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}
