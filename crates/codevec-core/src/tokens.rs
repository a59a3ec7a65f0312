//! Snippet and token types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Canonical placeholder for string and character literals.
pub const STRING_LITERAL_TOKEN: &str = "STRING_LITERAL";
/// Canonical placeholder for integer literals.
pub const INT_LITERAL_TOKEN: &str = "INT_LITERAL";
/// Canonical placeholder for floating-point literals.
pub const FLOAT_LITERAL_TOKEN: &str = "FLOAT_LITERAL";
/// Canonical placeholder for boolean literals.
pub const BOOL_LITERAL_TOKEN: &str = "BOOL_LITERAL";
/// Canonical placeholder for locally-declared variable identifiers.
pub const VARIABLE_TOKEN: &str = "VARIABLE";

/// One source-code sample tagged with its programming language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub language: String,
    pub code: String,
}

impl Snippet {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }
}

/// A snippet after tokenization. Token order is source appearance order;
/// downstream context-window extraction depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedSnippet {
    pub language: String,
    pub tokens: Vec<String>,
}
