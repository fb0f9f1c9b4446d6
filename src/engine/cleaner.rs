use kuchiki::NodeRef;
use kuchiki::traits::*;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::dom::{self, deep_clone, inner_html, visible_text};
use crate::engine::model::{CleanedContent, Heading};
use crate::engine::selectors::{
    MAX_TEXT_CHARS, MIN_PARAGRAPH_CHARS, TRUNCATION_SUFFIX, UNWANTED_SELECTORS,
};

/// Elements that count as embedded media when pruning empty wrappers.
const MEDIA_TAGS: &[&str] = &["img", "svg", "video", "audio"];

static CONTROL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap());

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip boilerplate from a copy of `element` and flatten it to bounded text.
///
/// The live tree is never mutated; all surgery happens on a deep copy.
/// Cleaning never fails: a tree with nothing extractable yields empty text
/// and zero counts.
pub fn clean(element: &NodeRef) -> CleanedContent {
    let Some(scratch) = deep_clone(element) else {
        return CleanedContent::default();
    };

    remove_unwanted(&scratch);
    prune_empty_wrappers(&scratch);

    let mut text = normalize_text(&visible_text(&scratch));
    let truncated = text.chars().count() > MAX_TEXT_CHARS;
    if truncated {
        text = text.chars().take(MAX_TEXT_CHARS).collect();
        text.push_str(TRUNCATION_SUFFIX);
    }

    let word_count = dom::word_count(&text);
    let paragraphs = collect_paragraphs(&scratch);
    let headings = collect_headings(&scratch);

    CleanedContent {
        html: inner_html(&scratch),
        text,
        word_count,
        paragraphs,
        headings,
        truncated,
    }
}

/// Collapse whitespace runs to single spaces, drop C0 control characters and
/// trim. Applying this twice gives the same result as applying it once.
pub fn normalize_text(text: &str) -> String {
    let stripped = CONTROL_CHARS.replace_all(text, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

fn remove_unwanted(root: &NodeRef) {
    for selector in UNWANTED_SELECTORS {
        // Selectors that fail to parse are skipped, not fatal.
        let Ok(matches) = root.select(selector) else {
            continue;
        };
        let doomed: Vec<NodeRef> = matches.map(|m| m.as_node().clone()).collect();
        for node in doomed {
            node.detach();
        }
    }
}

/// Drop wrapper elements left empty by boilerplate removal. An element
/// survives if it has visible text or embedded media anywhere beneath it.
fn prune_empty_wrappers(root: &NodeRef) {
    let elements: Vec<NodeRef> = root
        .descendants()
        .elements()
        .map(|e| e.as_node().clone())
        .collect();
    for element in elements {
        if visible_text(&element).trim().is_empty() && !has_embedded_media(&element) {
            element.detach();
        }
    }
}

fn has_embedded_media(element: &NodeRef) -> bool {
    if let Some(data) = element.as_element()
        && MEDIA_TAGS.contains(&&*data.name.local)
    {
        return true;
    }
    match element.select(&MEDIA_TAGS.join(", ")) {
        Ok(mut matches) => matches.next().is_some(),
        Err(()) => false,
    }
}

fn collect_paragraphs(root: &NodeRef) -> Vec<String> {
    let Ok(matches) = root.select("p") else {
        return Vec::new();
    };
    matches
        .filter_map(|paragraph| {
            let text = normalize_text(&visible_text(paragraph.as_node()));
            (text.chars().count() > MIN_PARAGRAPH_CHARS).then_some(text)
        })
        .collect()
}

fn collect_headings(root: &NodeRef) -> Vec<Heading> {
    let Ok(matches) = root.select("h1, h2, h3, h4") else {
        return Vec::new();
    };
    matches
        .filter_map(|heading| {
            let tag = &heading.name.local;
            let level = tag.as_bytes().get(1).map(|b| b - b'0')?;
            let text = normalize_text(&visible_text(heading.as_node()));
            (!text.is_empty()).then_some(Heading { level, text })
        })
        .collect()
}
