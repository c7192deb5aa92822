//! Is a module containing the [`Token`] type and all of its related types.

use std::collections::HashMap;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration of the single-character punctuation and operator symbols recognized by the
/// scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum PunctuationKind {
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Colon,
    Semicolon,
    Equals,
    Plus,
    Minus,
    Star,
    Slash,
    Hash,
}

/// Is an error that is returned when a character does not correspond to any [`PunctuationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("the character is not a recognized punctuation symbol.")]
pub struct PunctuationParseError;

impl PunctuationKind {
    /// Gets the character that the punctuation kind represents.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::OpenBrace => '{',
            Self::CloseBrace => '}',
            Self::OpenBracket => '[',
            Self::CloseBracket => ']',
            Self::Comma => ',',
            Self::Colon => ':',
            Self::Semicolon => ';',
            Self::Equals => '=',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Hash => '#',
        }
    }

    /// Classifies the given character into a [`PunctuationKind`].
    ///
    /// # Errors
    /// [`PunctuationParseError`]: the character is not in the recognized set.
    pub fn from_char(character: char) -> Result<Self, PunctuationParseError> {
        lazy_static! {
            static ref CHAR_PUNCTUATION_MAP: HashMap<char, PunctuationKind> = {
                let mut map = HashMap::new();

                for kind in PunctuationKind::iter() {
                    map.insert(kind.as_char(), kind);
                }

                map
            };
        }
        CHAR_PUNCTUATION_MAP
            .get(&character)
            .copied()
            .ok_or(PunctuationParseError)
    }
}

/// Is an enumeration containing all kinds of tokens produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Token {
    EndOfInput(EndOfInput),
    Identifier(Identifier),
    Number(Number),
    Str(Str),
    Punctuation(Punctuation),
}

impl Token {
    /// Returns the 1-based line number where the token's first character appears.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::EndOfInput(token) => token.line,
            Self::Identifier(token) => token.line,
            Self::Number(token) => token.line,
            Self::Str(token) => token.line,
            Self::Punctuation(token) => token.line,
        }
    }

    /// Returns the exact source text that produced the token.
    ///
    /// Punctuation and the end-of-input sentinel carry no text of their own; the kind alone is
    /// sufficient to identify them.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::EndOfInput(_) | Self::Punctuation(_) => "",
            Self::Identifier(token) => &token.text,
            Self::Number(token) => &token.text,
            Self::Str(token) => &token.text,
        }
    }
}

/// Represents the sentinel token produced once the whole source has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndOfInput {
    /// The 1-based line number where the input ended.
    pub line: usize,
}

/// Represents a maximal run of alphanumeric/underscore characters starting with an ASCII letter
/// or an underscore.
///
/// No distinction between identifiers and reserved words is made at this layer; that is a parser
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// The exact source text of the identifier.
    pub text: String,

    /// The 1-based line number where the identifier starts.
    pub line: usize,
}

/// Represents a maximal run of decimal digits.
///
/// No sign, decimal point, exponent, or digit separator is recognized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number {
    /// The exact source text of the number.
    pub text: String,

    /// The 1-based line number where the number starts.
    pub line: usize,
}

/// Represents a string literal.
///
/// Reserved: no classification rule currently produces this token, and a quote character is
/// reported as a lexical error like any other unrecognized character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Str {
    /// The content of the string literal.
    pub text: String,

    /// The 1-based line number where the literal starts.
    pub line: usize,
}

/// Represents a single punctuation/operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punctuation {
    /// The kind of the symbol.
    pub kind: PunctuationKind,

    /// The 1-based line number where the symbol appears.
    pub line: usize,
}
