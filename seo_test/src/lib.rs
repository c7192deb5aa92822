//! Provides shared utilities for property-based testing across the compiler crates.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links
)]

pub mod input;
