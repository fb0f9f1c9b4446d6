use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Readable content extracted from one page. Produced fresh on every
/// extraction request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageContent {
    pub title: String,
    pub url: String,
    /// Cleaned text, capped at 15000 characters with a `...` suffix.
    pub text: String,
    /// Markup of the cleaned main-content subtree.
    pub html: String,
    pub word_count: usize,
    /// Paragraph blocks longer than 20 characters, in document order.
    pub paragraphs: Vec<String>,
    /// h1-h4 headings, in document order.
    pub headings: Vec<Heading>,
    pub truncated: bool,
}

impl PageContent {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Heading {
    /// Heading depth, 1 through 4.
    pub level: u8,
    pub text: String,
}

/// Output of the cleaning pass, before page metadata is attached.
#[derive(Debug, Default)]
pub struct CleanedContent {
    pub text: String,
    pub html: String,
    pub word_count: usize,
    pub paragraphs: Vec<String>,
    pub headings: Vec<Heading>,
    pub truncated: bool,
}
