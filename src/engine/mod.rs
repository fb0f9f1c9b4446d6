//! The extraction/highlight engine.
//!
//! Three heuristics over a `kuchiki` DOM tree: the locator picks the subtree
//! most likely to hold the article body, the cleaner strips boilerplate from
//! a copy of it and flattens it to bounded text, and the highlighter wraps
//! matched sentences in reversible markers. The document is always passed in
//! explicitly; the engine keeps no state between calls and never fails on
//! malformed markup.

pub mod cleaner;
pub mod dom;
pub mod highlighter;
pub mod locator;
pub mod meta;
pub mod model;
pub mod selectors;

#[cfg(test)]
mod tests;

pub use model::{Heading, PageContent};

/// Extract the readable content of a page.
pub fn extract(html: &str, url: &str) -> PageContent {
    let document = dom::parse_document(html);
    let title = meta::page_title(html);

    // 1. Find the main content container (falls back to <body>)
    let main = locator::locate(&document);

    // 2. Strip boilerplate from a copy and flatten to bounded text
    let cleaned = cleaner::clean(&main);

    PageContent {
        title,
        url: url.to_string(),
        text: cleaned.text,
        html: cleaned.html,
        word_count: cleaned.word_count,
        paragraphs: cleaned.paragraphs,
        headings: cleaned.headings,
        truncated: cleaned.truncated,
    }
}
