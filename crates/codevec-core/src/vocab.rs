//! Token vocabulary built over a tokenized corpus.

use crate::tokens::TokenizedSnippet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Bijective mapping between tokens and dense integer ids.
///
/// Ids are assigned in lexicographic token order over the full distinct-token
/// set, so rebuilding from the same corpus yields the same mapping no matter
/// how the rows were processed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    token_to_id: HashMap<String, usize>,
    id_to_token: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary over every distinct token in the corpus.
    ///
    /// An empty corpus yields an empty mapping.
    pub fn build(corpus: &[TokenizedSnippet]) -> Self {
        let distinct: BTreeSet<&str> = corpus
            .iter()
            .flat_map(|row| row.tokens.iter().map(String::as_str))
            .collect();

        let id_to_token: Vec<String> = distinct.into_iter().map(String::from).collect();
        let token_to_id = id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), id))
            .collect();

        Self {
            token_to_id,
            id_to_token,
        }
    }

    /// Id assigned to `token`, if it was observed in the corpus.
    pub fn id(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    /// Token stored under `id`.
    pub fn token(&self, id: usize) -> Option<&str> {
        self.id_to_token.get(id).map(String::as_str)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Tokens in id order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.id_to_token.iter().map(String::as_str)
    }
}
