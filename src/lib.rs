//! PageBrief: readable-content extraction, summarization and sentence
//! highlighting for web pages.
//!
//! The [`engine`] module holds the extraction/highlight core; [`fetcher`]
//! retrieves pages, [`llm`] talks to an OpenAI-compatible completion
//! endpoint, and [`api`] exposes the whole thing as a JSON HTTP service.

pub mod api;
pub mod app_state;
pub mod config;
pub mod engine;
pub mod fetcher;
pub mod health;
pub mod llm;
