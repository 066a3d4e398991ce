// tests/http_transport.rs
//
// HttpTransport against a one-shot HTTP/1.1 server on a local socket.

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

use subsidy_search::{
    core::net::{HttpTransport, SearchTransport},
    error::SearchError,
    model::SearchCriteria,
};

/// Serve exactly one request with `status` and `body`. The handle yields the
/// raw request body that was received.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/v1/search", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            let lower = line.to_ascii_lowercase();
            if let Some(v) = lower.strip_prefix("content-length:") {
                content_length = v.trim().parse().unwrap();
            }
        }
        let mut req_body = vec![0u8; content_length];
        reader.read_exact(&mut req_body).unwrap();

        let mut stream = stream;
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();

        String::from_utf8(req_body).unwrap()
    });

    (url, handle)
}

fn request() -> subsidy_search::model::SearchRequest {
    SearchCriteria::from_fields("福岡県", "", "情報通信業", "DX", "5").to_request()
}

#[test]
fn posts_json_and_parses_success() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"items":[{"title":"IT導入補助金","amount_max":4500000,"rate_max":0.5}],"took_ms":31}"#,
    );

    let transport = HttpTransport::new().unwrap();
    let resp = transport.search(&url, &request()).unwrap();
    assert_eq!(resp.items.len(), 1);
    assert_eq!(resp.items[0].title.as_deref(), Some("IT導入補助金"));
    assert_eq!(resp.took_ms, 31);

    let sent: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
    assert_eq!(sent["prefecture"], "福岡県");
    assert_eq!(sent["industry"], "情報通信業");
    assert_eq!(sent["keywords"], "DX");
    assert!(sent["municipality"].is_null());
    assert_eq!(sent["top_k"], 5);
}

#[test]
fn non_success_status_is_an_error() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);

    let transport = HttpTransport::new().unwrap();
    let err = transport.search(&url, &request()).unwrap_err();
    assert!(matches!(err, SearchError::Status(500)));
    assert_eq!(err.to_string(), "HTTP 500");

    server.join().unwrap();
}

#[test]
fn unparsable_body_is_a_decode_error() {
    let (url, server) = serve_once("200 OK", "<html>not json</html>");

    let transport = HttpTransport::new().unwrap();
    let err = transport.search(&url, &request()).unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)), "{err:?}");
    assert!(err.to_string().starts_with("invalid response:"));

    server.join().unwrap();
}

#[test]
fn unreachable_host_is_a_transport_error() {
    // bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let url = format!("http://127.0.0.1:{port}/v1/search");

    let transport = HttpTransport::new().unwrap();
    let err = transport.search(&url, &request()).unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)), "{err:?}");
}
