//! Scope-aware token emission over tree-sitter parse trees.
//!
//! Each walker is a recursive descent that emits one token per terminal in
//! source order, rewriting literal terminals to their canonical placeholder
//! and locally-declared identifiers to VARIABLE. Traversal state (the
//! lexical scope stack and the in-declaration flag) lives in an explicit
//! context threaded through every visit step, not in listener callbacks
//! mutating hidden instance state.

mod cpp;
mod csharp;
mod go;
mod python;

use crate::languages::Language;
use std::collections::HashSet;

/// Tokenize a parsed snippet with the walker registered for `language`.
pub(crate) fn tokenize(language: Language, tree: &tree_sitter::Tree, source: &str) -> Vec<String> {
    match language {
        Language::Cpp => cpp::tokenize(tree, source),
        Language::CSharp => csharp::tokenize(tree, source),
        Language::Go => go::tokenize(tree, source),
        Language::Python => python::tokenize(tree, source),
    }
}

/// Stack of lexical scopes, innermost last.
///
/// The base scope holds file-level declarations and outlives every push/pop
/// pair, so a stray closing brace in otherwise-accepted input cannot
/// underflow the stack.
#[derive(Debug)]
pub(crate) struct ScopeStack {
    scopes: Vec<HashSet<String>>,
}

impl ScopeStack {
    pub(crate) fn new() -> Self {
        Self {
            scopes: vec![HashSet::new()],
        }
    }

    pub(crate) fn push(&mut self) {
        self.scopes.push(HashSet::new());
    }

    pub(crate) fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Record a declared name in the innermost scope.
    pub(crate) fn declare(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string());
        }
    }

    /// Exact-text lookup, innermost scope first.
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains(name))
    }

    /// Nesting depth relative to the base scope.
    pub(crate) fn depth(&self) -> usize {
        self.scopes.len() - 1
    }
}

/// Slice the source text covered by a node. Empty on a zero-width
/// (missing) node or a range that does not fall on char boundaries.
pub(crate) fn node_text<'s>(node: &tree_sitter::Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}
