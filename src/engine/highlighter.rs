//! Reversible sentence highlighting.
//!
//! Matches are wrapped in `<mark class="pagebrief-mark">` elements carrying
//! the exact original text, so clearing restores the document's textual
//! content byte for byte.

use kuchiki::NodeRef;
use kuchiki::traits::*;

use crate::engine::dom::new_element;
use crate::engine::selectors::{EXCLUDED_HIGHLIGHT_CONTAINERS, MIN_SENTENCE_CHARS};

/// Class carried by every marker element.
pub const MARK_CLASS: &str = "pagebrief-mark";

/// Attribute holding the exact matched text, used for reversal.
pub const MARK_ORIGINAL_ATTR: &str = "data-original-text";

/// Attribute holding the search sentence that produced the match.
pub const MARK_SENTENCE_ATTR: &str = "data-sentence";

const MARK_SELECTOR: &str = "mark.pagebrief-mark";
const MARK_ID_PREFIX: &str = "pagebrief-mark-";

/// Wrap every occurrence of each sentence in a marker element.
///
/// Existing markers are always cleared first, so repeated calls are
/// idempotent with respect to prior highlight state. Sentences shorter than
/// [`MIN_SENTENCE_CHARS`] are skipped; sentences that match nothing place
/// zero marks, silently. Returns the number of marks placed. Markers get
/// sequential ids (`pagebrief-mark-1`, ...) usable as scroll anchors.
pub fn highlight<S: AsRef<str>>(document: &NodeRef, sentences: &[S]) -> usize {
    clear(document);

    let mut placed = 0;
    for sentence in sentences {
        let sentence = sentence.as_ref().trim();
        if sentence.chars().count() < MIN_SENTENCE_CHARS {
            continue;
        }
        placed += mark_sentence(document, sentence, placed);
    }
    placed
}

/// Remove every marker, restoring each to its recorded original text.
pub fn clear(document: &NodeRef) {
    let Ok(matches) = document.select(MARK_SELECTOR) else {
        return;
    };
    let marks: Vec<NodeRef> = matches.map(|m| m.as_node().clone()).collect();
    for mark in marks {
        let original = mark
            .as_element()
            .and_then(|el| el.attributes.borrow().get(MARK_ORIGINAL_ATTR).map(String::from))
            .unwrap_or_else(|| mark.text_contents());
        mark.insert_before(NodeRef::new_text(original));
        mark.detach();
    }
}

/// First marker element in document order, if any highlight is active.
pub fn first_mark_id(document: &NodeRef) -> Option<String> {
    let mark = document.select_first(MARK_SELECTOR).ok()?;
    mark.attributes.borrow().get("id").map(String::from)
}

fn mark_sentence(document: &NodeRef, sentence: &str, already_placed: usize) -> usize {
    let needle = sentence.to_ascii_lowercase();

    // Snapshot candidates before mutating: wrapping replaces text leaves.
    let candidates: Vec<NodeRef> = document
        .descendants()
        .text_nodes()
        .filter(|leaf| !inside_mark(leaf.as_node()) && !in_excluded_container(leaf.as_node()))
        .filter(|leaf| leaf.borrow().to_ascii_lowercase().contains(&needle))
        .map(|leaf| leaf.as_node().clone())
        .collect();

    let mut placed = 0;
    for leaf in candidates {
        if wrap_first_occurrence(&leaf, sentence, &needle, already_placed + placed + 1) {
            placed += 1;
        }
    }
    placed
}

/// Split one text leaf around its first case-insensitive occurrence of the
/// sentence and wrap the exact-case matched substring in a marker.
///
/// ASCII case folding keeps byte offsets identical between the folded and
/// original text, so the split is always on a character boundary.
fn wrap_first_occurrence(leaf: &NodeRef, sentence: &str, needle: &str, id: usize) -> bool {
    let Some(text) = leaf.as_text() else {
        return false;
    };
    let original = text.borrow().clone();
    let Some(start) = original.to_ascii_lowercase().find(needle) else {
        return false;
    };
    let end = start + needle.len();

    let before = &original[..start];
    let matched = &original[start..end];
    let after = &original[end..];

    let mark = new_element(
        "mark",
        &[
            ("class", MARK_CLASS),
            ("id", &format!("{MARK_ID_PREFIX}{id}")),
            (MARK_ORIGINAL_ATTR, matched),
            (MARK_SENTENCE_ATTR, sentence),
        ],
    );
    mark.append(NodeRef::new_text(matched));

    if !before.is_empty() {
        leaf.insert_before(NodeRef::new_text(before));
    }
    leaf.insert_before(mark);
    if !after.is_empty() {
        leaf.insert_before(NodeRef::new_text(after));
    }
    leaf.detach();
    true
}

fn inside_mark(leaf: &NodeRef) -> bool {
    leaf.ancestors().any(|ancestor| {
        ancestor.as_element().is_some_and(|el| {
            &*el.name.local == "mark"
                && el
                    .attributes
                    .borrow()
                    .get("class")
                    .is_some_and(|class| class.split_whitespace().any(|c| c == MARK_CLASS))
        })
    })
}

fn in_excluded_container(leaf: &NodeRef) -> bool {
    leaf.parent()
        .and_then(|parent| {
            parent
                .as_element()
                .map(|el| EXCLUDED_HIGHLIGHT_CONTAINERS.contains(&&*el.name.local))
        })
        .unwrap_or(false)
}
