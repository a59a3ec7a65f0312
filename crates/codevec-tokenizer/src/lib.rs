//! Tokenization engine for codevec.
//!
//! Turns raw code snippets into normalized token sequences: a regex-based
//! fallback for arbitrary languages, and grammar-backed scope-aware
//! tokenizers (C++, C#, Go, Python) served by a fixed pool of long-lived
//! parser workers. [`dispatch::tokenize_corpus`] routes each row to the
//! right backend and reassembles results in input order.

pub mod dispatch;
pub mod generic;
pub mod languages;
pub mod normalize;
pub mod pool;

mod walk;
