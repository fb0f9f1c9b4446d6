use kuchiki::NodeRef;

use crate::engine::dom::{visible_text, word_count};
use crate::engine::selectors::{MAIN_CONTENT_MIN_WORDS, MAIN_CONTENT_SELECTORS};

/// Find the element most likely to hold the article body.
///
/// Candidate selectors are tried in priority order; within one selector,
/// matches are visited in document order. The first element with more than
/// [`MAIN_CONTENT_MIN_WORDS`] visible words wins. Falls back to `<body>`
/// (or the document root on body-less trees), so this always returns a node.
pub fn locate(document: &NodeRef) -> NodeRef {
    for selector in MAIN_CONTENT_SELECTORS {
        let Ok(matches) = document.select(selector) else {
            continue;
        };
        for candidate in matches {
            if has_enough_content(candidate.as_node()) {
                return candidate.as_node().clone();
            }
        }
    }

    match document.select_first("body") {
        Ok(body) => body.as_node().clone(),
        Err(()) => document.clone(),
    }
}

fn has_enough_content(element: &NodeRef) -> bool {
    word_count(&visible_text(element)) > MAIN_CONTENT_MIN_WORDS
}
