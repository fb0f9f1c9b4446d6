//! Static selector configuration for the extraction engine.
//!
//! Two ordered lists drive the heuristics: candidate main-content containers
//! (tried in priority order, first acceptable match wins) and unwanted
//! boilerplate selectors (all matches removed). Entries that fail to parse as
//! CSS selectors are skipped silently.

/// Candidate main-content containers, highest priority first.
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role='main']",
    "main",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".blog-content",
    ".content-body",
    ".text-content",
    ".story-body",
    ".post-body",
    "#content",
    ".content",
    "[itemprop='articleBody']",
    ".article-body",
];

/// Boilerplate removed from the cleaned copy: scripts, chrome, ads, share
/// widgets, comments, sidebars, popups, hidden and promotional blocks.
pub const UNWANTED_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    "iframe",
    "noscript",
    "ins",
    ".ad",
    ".ads",
    ".advertisement",
    ".ad-wrapper",
    ".social-share",
    ".share-buttons",
    ".sharing",
    ".comments",
    ".comment-area",
    ".comments-section",
    ".sidebar",
    ".widget",
    ".popup",
    ".modal",
    ".navigation",
    ".nav",
    ".menu",
    "[role='banner']",
    "[role='navigation']",
    "[role='complementary']",
    "[role='contentinfo']",
    ".hidden",
    ".hide",
    "[aria-hidden='true']",
    ".promo",
    ".promoted",
    ".sponsored",
];

/// Minimum visible word count for a main-content candidate to qualify.
pub const MAIN_CONTENT_MIN_WORDS: usize = 50;

/// Cleaned text is capped at this many characters.
pub const MAX_TEXT_CHARS: usize = 15_000;

/// Appended to capped text.
pub const TRUNCATION_SUFFIX: &str = "...";

/// Paragraphs at or below this length are dropped from `paragraphs`.
pub const MIN_PARAGRAPH_CHARS: usize = 20;

/// Tag names whose text leaves are never highlighted.
pub const EXCLUDED_HIGHLIGHT_CONTAINERS: &[&str] =
    &["script", "style", "nav", "header", "footer", "aside"];

/// Sentences shorter than this are too ambiguous to highlight safely.
pub const MIN_SENTENCE_CHARS: usize = 6;
