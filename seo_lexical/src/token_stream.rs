//! Contains the [`TokenStream`] struct and its related types.

use std::ops::Index;

use derive_more::Deref;
use seo_base::source_file::SourceFile;

use crate::{
    error::{CapacityExceeded, Error},
    scanner::Scanner,
    token::Token,
};

/// The default upper bound on the number of tokens a single source unit may produce.
pub const DEFAULT_TOKEN_LIMIT: usize = 16_384;

/// Is an ordered, bounded sequence of [`Token`]s produced by exhausting a [`Scanner`].
///
/// A stream is empty or ends with exactly one end-of-input token, which is never followed by
/// further tokens. This struct is the final output of the lexical analysis phase and is meant to
/// be handed to the next stage of the compilation process as a completed, immutable artifact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source file with the [`DEFAULT_TOKEN_LIMIT`].
    ///
    /// # Errors
    /// See [`Self::tokenize_with_limit`].
    pub fn tokenize(source_file: &SourceFile) -> Result<Self, Error> {
        Self::tokenize_with_limit(source_file, DEFAULT_TOKEN_LIMIT)
    }

    /// Tokenizes the given source file by calling [`Scanner::next_token`] repeatedly until the
    /// end-of-input token has been appended (inclusive).
    ///
    /// # Errors
    /// - [`Error::Lexical`]: a character does not belong to any recognized token-start class;
    ///   tokenization aborts at the first such character.
    /// - [`Error::CapacityExceeded`]: appending would exceed `limit` tokens.
    pub fn tokenize_with_limit(source_file: &SourceFile, limit: usize) -> Result<Self, Error> {
        let mut scanner = Scanner::new(source_file);
        let mut tokens = Vec::new();

        loop {
            let token = scanner.next_token()?;

            if tokens.len() == limit {
                return Err(CapacityExceeded { limit }.into());
            }

            let end_of_input = token.is_end_of_input();
            tokens.push(token);

            if end_of_input {
                return Ok(Self { tokens });
            }
        }
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

#[cfg(test)]
mod tests;
