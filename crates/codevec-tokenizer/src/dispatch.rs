//! Per-language routing and order-preserving parallel dispatch.

use crate::generic::tokenize_generic;
use crate::languages::Language;
use crate::pool::{ParserPool, RowError};
use codevec_core::tokens::{Snippet, TokenizedSnippet};
use rayon::prelude::*;

/// Outcome of tokenizing one corpus.
#[derive(Debug, Default)]
pub struct TokenizeReport {
    /// Tokenized rows in original corpus order (failed rows omitted).
    pub rows: Vec<TokenizedSnippet>,
    /// Rows the specialized path rejected, keyed by original index.
    pub failures: Vec<RowFailure>,
}

/// A row-level failure recorded instead of aborting the batch.
#[derive(Debug, Clone)]
pub struct RowFailure {
    pub index: usize,
    pub language: String,
    pub error: RowError,
}

/// Tokenize a mixed-language corpus.
///
/// Rows whose language has a registered grammar go through the worker pool;
/// everything else takes the generic regex tokenizer. Rows run in parallel
/// but results are collected keyed by original index, so output order always
/// matches input order no matter how completions interleave. A specialized
/// row that fails is recorded in the report and never disturbs its
/// neighbors.
pub fn tokenize_corpus(snippets: &[Snippet], pool: &ParserPool) -> TokenizeReport {
    let results: Vec<Result<Vec<String>, RowError>> = snippets
        .par_iter()
        .enumerate()
        .map(|(index, snippet)| match Language::from_name(&snippet.language) {
            Some(language) => pool.tokenize(index, language, &snippet.code),
            None => Ok(tokenize_generic(&snippet.code)),
        })
        .collect();

    let mut report = TokenizeReport::default();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(tokens) => report.rows.push(TokenizedSnippet {
                language: snippets[index].language.clone(),
                tokens,
            }),
            Err(error) => {
                tracing::warn!(index, language = %snippets[index].language, %error, "row failed");
                report.failures.push(RowFailure {
                    index,
                    language: snippets[index].language.clone(),
                    error,
                });
            }
        }
    }

    tracing::debug!(
        rows = report.rows.len(),
        failures = report.failures.len(),
        "corpus tokenized"
    );
    report
}
