//! Structured field extraction for free-text inventory columns.
//!
//! Owner and device columns are too irregular for rule-based parsing, so
//! they are handed to a language model that answers with a flat JSON object.
//! [`Extractor`] is the seam: [`ChatExtractor`] talks to an
//! OpenAI-compatible endpoint, [`DisabledExtractor`] answers every request
//! with an empty object so the pipeline can run offline.

use std::collections::BTreeMap;

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::ChatExtractor;
pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use response::{parse_fields, strip_code_fence};

/// Flat key/value answer from an extractor.
pub type Fields = BTreeMap<String, String>;

/// Source of structured fields for a prompt pair.
///
/// Implementations are shared across worker threads.
pub trait Extractor: Send + Sync {
    fn extract(&self, system_prompt: &str, user_prompt: &str) -> Result<Fields>;

    /// Short label for logs.
    fn name(&self) -> &str;
}

/// Extractor used when no API is available: every answer is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledExtractor;

impl Extractor for DisabledExtractor {
    fn extract(&self, _system_prompt: &str, _user_prompt: &str) -> Result<Fields> {
        Ok(Fields::new())
    }

    fn name(&self) -> &str {
        "disabled"
    }
}
