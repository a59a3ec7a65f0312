//! Core types for the codevec tokenization pipeline.
//!
//! Provides the snippet/token data model ([`tokens`]), the corpus-wide
//! [`vocab::Vocabulary`], and runtime configuration ([`config`]).

pub mod config;
pub mod tokens;
pub mod vocab;
