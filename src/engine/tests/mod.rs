use std::fs;

use crate::engine::{dom, extract, highlighter};

fn load_fixture() -> String {
    fs::read_to_string("src/engine/tests/fixtures/article.html")
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_article() {
    let content = extract(&load_fixture(), "https://blog.example.com/ownership");

    assert_eq!(content.title, "Understanding Rust Ownership");
    assert_eq!(content.url, "https://blog.example.com/ownership");

    // Article body made it through
    assert!(content.text.contains("single owning variable"));
    assert!(content.text.contains("borrow checker"));

    // Boilerplate did not
    assert!(!content.text.contains("Subscribe to our premium plan"));
    assert!(!content.text.contains("Share on X"));
    assert!(!content.text.contains("Great post"));
    assert!(!content.text.contains("decorative divider"));
    assert!(!content.html.contains("social-share"));

    // Three long paragraphs collected; the tiny footnote is filtered out
    assert_eq!(content.paragraphs.len(), 3);
    assert!(content.paragraphs[0].starts_with("Ownership is the feature"));

    let heading_levels: Vec<u8> = content.headings.iter().map(|h| h.level).collect();
    assert_eq!(heading_levels, vec![1, 2, 2]);
    assert_eq!(content.headings[1].text, "Moves and Borrows");

    assert!(!content.truncated);
    assert!(content.word_count > 100);
}

#[test]
fn test_extract_thin_page_falls_back_to_body() {
    let html = "<html><head><title>Thin</title></head>\
                <body><article>short</article><p>a few more words outside</p></body></html>";
    let content = extract(html, "https://example.com/thin");

    // Nothing qualified, so the whole body is used
    assert_eq!(content.title, "Thin");
    assert!(content.text.contains("short"));
    assert!(content.text.contains("a few more words outside"));
}

#[test]
fn test_extract_empty_page() {
    let content = extract("<html><body></body></html>", "https://example.com/empty");
    assert_eq!(content.text, "");
    assert_eq!(content.word_count, 0);
    assert!(content.paragraphs.is_empty());
    assert!(content.headings.is_empty());
    assert!(!content.truncated);
}

#[test]
fn test_extract_malformed_html() {
    let content = extract(
        "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content",
        "https://example.com/broken",
    );
    assert_eq!(content.title, "Broken");
    assert!(content.text.contains("Unclosed tags"));
    assert!(content.text.contains("More content"));
}

#[test]
fn test_extract_then_highlight_round_trip() {
    let html = load_fixture();
    let content = extract(&html, "https://blog.example.com/ownership");
    assert!(content.text.contains("borrow checker"));

    // Highlight sentences drawn from the extracted text on the live document
    let document = dom::parse_document(&html);
    let original = document.text_contents();

    let placed = highlighter::highlight(&document, &["borrow checker", "not in the page"]);
    assert_eq!(placed, 1);

    highlighter::clear(&document);
    assert_eq!(document.text_contents(), original);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/.*"
        ) {
            // Arbitrary markup must degrade gracefully, never crash
            let _ = extract(&html, &url);
        }

        #[test]
        fn test_highlight_round_trip_restores_text(
            sentences in proptest::collection::vec(".{0,40}", 0..8)
        ) {
            let document = dom::parse_document(
                "<body><p>The quick brown fox. It jumps over the lazy dog. \
                 The dog barks.</p></body>",
            );
            let original = document.text_contents();
            highlighter::highlight(&document, &sentences);
            highlighter::clear(&document);
            prop_assert_eq!(document.text_contents(), original);
        }
    }
}
