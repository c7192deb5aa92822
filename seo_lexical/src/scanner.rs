//! Contains the [`Scanner`] state machine that extracts one token at a time from the source.

use getset::CopyGetters;
use seo_base::source_file::SourceFile;

use crate::{
    error::LexicalError,
    token::{EndOfInput, Identifier, Number, Punctuation, PunctuationKind, Token},
};

/// Is the single-pass cursor state machine that classifies and extracts exactly one lexical unit
/// per call.
///
/// The scanner borrows the source for its whole lifetime and never mutates it. The cursor only
/// moves forward; once the end of the input has been reached, every further call produces an
/// equivalent end-of-input token.
#[derive(Debug, Clone, CopyGetters)]
#[allow(missing_copy_implementations)]
pub struct Scanner<'a> {
    source: &'a SourceFile,

    /// Gets the byte offset of the next unconsumed character.
    #[get_copy = "pub"]
    position: usize,

    /// Gets the 1-based line number at the cursor.
    #[get_copy = "pub"]
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner positioned at the start of the given source file.
    #[must_use]
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Extracts the next token from the source.
    ///
    /// Whitespace (space, tab, carriage return, newline) is skipped and never tokenized; the line
    /// counter is incremented once per line terminator consumed (`\n`, `\r\n`, or a lone `\r`,
    /// the same model [`SourceFile`] uses). Identifier and number runs are consumed
    /// with maximal munch. The produced token carries the line number of its first character.
    ///
    /// # Errors
    /// [`LexicalError`]: the next character does not start any recognized token class. No token
    /// is produced for the character.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        self.skip_whitespace();

        let start = self.position;
        let line = self.line;

        let Some(character) = self.advance() else {
            return Ok(EndOfInput { line }.into());
        };

        if let Ok(kind) = PunctuationKind::from_char(character) {
            return Ok(Punctuation { kind, line }.into());
        }

        if character.is_ascii_digit() {
            self.walk(|c| c.is_ascii_digit());
            let text = self.source.content()[start..self.position].to_owned();
            return Ok(Number { text, line }.into());
        }

        if Self::is_identifier_start(character) {
            self.walk(Self::is_identifier_continue);
            let text = self.source.content()[start..self.position].to_owned();
            return Ok(Identifier { text, line }.into());
        }

        Err(LexicalError { character, line })
    }

    fn skip_whitespace(&mut self) {
        self.walk(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }

    /// Consumes characters while the predicate holds.
    fn walk(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(character) = self.peek() {
            if !predicate(character) {
                break;
            }

            self.advance();
        }
    }

    fn peek(&self) -> Option<char> { self.source.content()[self.position..].chars().next() }

    fn advance(&mut self) -> Option<char> {
        let character = self.peek()?;
        self.position += character.len_utf8();

        // a `\r\n` pair counts once, on the `\n`; a lone `\r` is a line break of its own,
        // matching [`SourceFile`]'s line numbering
        if character == '\n' || (character == '\r' && self.peek() != Some('\n')) {
            self.line += 1;
        }

        Some(character)
    }

    fn is_identifier_start(character: char) -> bool {
        character == '_' || character.is_ascii_alphabetic()
    }

    fn is_identifier_continue(character: char) -> bool {
        character == '_' || character.is_ascii_alphanumeric()
    }
}
