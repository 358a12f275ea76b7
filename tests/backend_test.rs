//! ローカルの疑似バックエンドに対する結合テスト

use number_lens::http::HttpBackend;
use number_lens::local::{FsPreviewReader, LocalImage};
use number_lens::output::Report;
use number_lens::pipeline;
use number_lens::terminal::TerminalView;
use number_lens_common::session::Collaborator;
use number_lens_common::{Error, ResultItem, Settings};
use std::path::Path;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// 1リクエストだけ受けて固定のレスポンスを返すサーバー
///
/// # Returns
/// (ベースURL, 受信したリクエスト全体)
async fn serve_once(status: u16, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(request);
    });

    (format!("http://{}", addr), rx)
}

/// ヘッダとContent-Length分のボディを読む
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn write_image(dir: &Path, name: &str) -> LocalImage {
    let path = dir.join(name);
    std::fs::write(&path, b"\x89PNG\r\n").unwrap();
    LocalImage::open(&path).unwrap()
}

#[test]
fn test_process_url_joins_endpoint() {
    let backend = HttpBackend::new("http://127.0.0.1:5000/", &Settings::default()).unwrap();
    assert_eq!(backend.process_url(), "http://127.0.0.1:5000/api/process");
}

async fn run(base: &str, image: LocalImage) -> Report {
    let backend = HttpBackend::new(base, &Settings::default()).unwrap();
    pipeline::process_image(image, &FsPreviewReader, &backend, Settings::default(), TerminalView::hidden()).await
}

#[tokio::test]
async fn test_process_sends_multipart_file_field() {
    let (base, request) = serve_once(
        200,
        r#"{"success":true,"data":{"numbers":[{"raw":"1O","normalized":"10"}],"raw_text":"1O"}}"#,
    )
    .await;
    let dir = tempdir().unwrap();
    let image = write_image(dir.path(), "meter.png");

    let report = run(&base, image).await;
    assert!(!report.is_error());
    assert_eq!(report.numbers, vec![ResultItem::new("1O", "10")]);
    assert_eq!(report.raw_text.as_deref(), Some("1O"));

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /api/process "));
    assert!(request.contains("multipart/form-data"));
    assert!(request.contains("name=\"file\""));
    assert!(request.contains("filename=\"meter.png\""));
    assert!(request.to_lowercase().contains("content-type: image/png"));
}

#[tokio::test]
async fn test_process_empty_numbers() {
    let (base, _request) = serve_once(200, r#"{"success":true,"data":{"numbers":[]}}"#).await;
    let dir = tempdir().unwrap();

    let report = run(&base, write_image(dir.path(), "blank.jpg")).await;
    assert!(!report.is_error());
    assert!(report.numbers.is_empty());
}

#[tokio::test]
async fn test_process_error_body() {
    let (base, _request) = serve_once(400, r#"{"error":"bad image"}"#).await;
    let dir = tempdir().unwrap();

    let report = run(&base, write_image(dir.path(), "meter.png")).await;
    assert_eq!(report.error.as_deref(), Some("bad image"));
}

#[tokio::test]
async fn test_process_error_without_message() {
    let (base, _request) = serve_once(500, r#"{}"#).await;
    let dir = tempdir().unwrap();

    let report = run(&base, write_image(dir.path(), "meter.png")).await;
    assert_eq!(report.error.as_deref(), Some("Failed to process image"));
}

#[tokio::test]
async fn test_process_non_json_body_is_transport_error() {
    let (base, _request) = serve_once(502, "Bad Gateway").await;
    let dir = tempdir().unwrap();
    let backend = HttpBackend::new(&base, &Settings::default()).unwrap();

    let err = backend.submit(&write_image(dir.path(), "meter.png")).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_process_unreachable_backend() {
    // 即座に閉じたポートへ接続する
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = tempdir().unwrap();
    let report = run(&format!("http://{}", addr), write_image(dir.path(), "meter.png")).await;
    assert!(report.is_error());
    assert!(report.numbers.is_empty());
}

#[tokio::test]
async fn test_health_ok() {
    let (base, request) = serve_once(200, r#"{"status":"ok"}"#).await;
    let backend = HttpBackend::new(&base, &Settings::default()).unwrap();

    let health = backend.health().await.unwrap();
    assert!(health.is_ok());
    assert!(request.await.unwrap().starts_with("GET /api/health "));
}

#[tokio::test]
async fn test_health_failure_status() {
    let (base, _request) = serve_once(503, r#"{"status":"down"}"#).await;
    let backend = HttpBackend::new(&base, &Settings::default()).unwrap();

    assert!(backend.health().await.is_err());
}
