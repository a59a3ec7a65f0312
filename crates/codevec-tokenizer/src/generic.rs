//! Regex fallback tokenizer for languages without a registered grammar.

use crate::normalize::normalize;
use regex::Regex;
use std::sync::LazyLock;

// One combined alternation, in priority order: word runs (identifiers,
// keywords, and the placeholders inserted by normalization), a lone dot,
// single bracket/quote-family punctuation, then maximal runs of any other
// symbol character. Whitespace matches no branch and is dropped.
static GENERIC_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\w+|\.|[<>/\\{}\[\]()'"]|[^a-zA-Z0-9_ \t\r\n\.<>/\\{}\[\]()'"]+"#)
        .expect("hard-coded pattern")
});

/// Tokenize arbitrary source text: lower-case, canonicalize literals, split.
///
/// Deterministic and total: malformed or partial code is fine, and no
/// emitted token is empty or contains whitespace.
pub fn tokenize_generic(code: &str) -> Vec<String> {
    let normalized = normalize(&code.to_lowercase());
    GENERIC_SPLIT
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}
