//! This crate implements the lexical analysis phase of the Seoggi compiler. This phase is
//! responsible for tokenizing the source code into a stream of tokens.
//!
//! The final output of this phase is a [`token_stream::TokenStream`], representing the bounded
//! list of tokens of a source file, terminated by an end-of-input sentinel.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod scanner;
pub mod token;
pub mod token_stream;
