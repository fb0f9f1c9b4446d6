pub mod client;
pub mod errors;
pub mod prompts;

pub use client::{ChatClient, Generator};
pub use errors::GenerateError;
pub use prompts::SummaryLength;

#[cfg(test)]
pub use client::MockGenerator;
