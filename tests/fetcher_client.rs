use std::io::Write;

use flate2::{Compression, write::GzEncoder};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use pagebrief::fetcher::{FetchError, fetch};

const PAGE: &str = "<html><head><title>Hi</title></head><body><p>Hello there</p></body></html>";

async fn serve(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_decodes_utf8_page() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/page",
        ResponseTemplate::new(200).set_body_raw(PAGE, "text/html; charset=utf-8"),
    )
    .await;

    let page = fetch(&format!("{}/page", server.uri())).await.unwrap();
    assert_eq!(page.status, 200);
    assert!(page.html.contains("Hello there"));
}

#[tokio::test]
async fn test_fetch_honours_header_charset() {
    let server = MockServer::start().await;
    // "café" in windows-1252: é is a single 0xE9 byte
    let body: Vec<u8> = b"<html><body><p>caf\xE9</p></body></html>".to_vec();
    serve(
        &server,
        "/page",
        ResponseTemplate::new(200)
            .set_body_bytes(body)
            .insert_header("Content-Type", "text/html; charset=windows-1252"),
    )
    .await;

    let page = fetch(&format!("{}/page", server.uri())).await.unwrap();
    assert!(page.html.contains("café"));
}

#[tokio::test]
async fn test_fetch_rejects_http_error_status() {
    let server = MockServer::start().await;
    serve(&server, "/gone", ResponseTemplate::new(404)).await;

    let err = fetch(&format!("{}/gone", server.uri())).await.unwrap_err();
    assert!(matches!(err, FetchError::Http(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/old",
        ResponseTemplate::new(301).insert_header("Location", format!("{}/new", server.uri())),
    )
    .await;
    serve(
        &server,
        "/new",
        ResponseTemplate::new(200).set_body_raw(PAGE, "text/html"),
    )
    .await;

    let page = fetch(&format!("{}/old", server.uri())).await.unwrap();
    assert!(page.url.path().ends_with("/new"));
    assert!(page.html.contains("Hello there"));
}

#[tokio::test]
async fn test_fetch_rejects_non_html_content_type() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/data",
        ResponseTemplate::new(200).set_body_raw("{\"not\": \"html\"}", "application/json"),
    )
    .await;

    let err = fetch(&format!("{}/data", server.uri())).await.unwrap_err();
    assert!(matches!(err, FetchError::UnsupportedContentType(ct) if ct.contains("json")));
}

#[tokio::test]
async fn test_fetch_rejects_oversized_body() {
    let server = MockServer::start().await;
    let huge = "x".repeat(6 * 1024 * 1024);
    serve(
        &server,
        "/huge",
        ResponseTemplate::new(200)
            .set_body_string(huge)
            .insert_header("Content-Type", "text/html"),
    )
    .await;

    let err = fetch(&format!("{}/huge", server.uri())).await.unwrap_err();
    assert!(matches!(err, FetchError::BodyTooLarge(_)));
}

#[tokio::test]
async fn test_fetch_rejects_invalid_url() {
    let err = fetch("not a url").await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_fetch_transparently_decompresses_gzip() {
    let server = MockServer::start().await;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(PAGE.as_bytes())
        .expect("Failed to compress body");
    let compressed = encoder.finish().expect("Failed to finish gzip stream");
    serve(
        &server,
        "/gz",
        ResponseTemplate::new(200)
            .set_body_bytes(compressed)
            .insert_header("Content-Type", "text/html; charset=utf-8")
            .insert_header("Content-Encoding", "gzip"),
    )
    .await;

    let page = fetch(&format!("{}/gz", server.uri())).await.unwrap();
    assert!(page.html.contains("Hello there"));
}
