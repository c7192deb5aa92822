use std::fmt::{Display, Write};

use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Just, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};
use seo_base::source_file::SourceFile;
use seo_test::input::Input;

use crate::{
    error::Error,
    token::{self, PunctuationKind, Token},
};

/// Represents the whitespace inserted between two consecutive generated tokens.
///
/// A separator never produces a token of its own; it only keeps adjacent identifier/number runs
/// from merging under maximal munch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Separator {
    Spaces(u8),
    Tabs(u8),
    NewLines(u8),
}

impl Arbitrary for Separator {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1u8..4)
            .prop_flat_map(|x| {
                prop_oneof![
                    Just(Self::Spaces(x)),
                    Just(Self::Tabs(x)),
                    Just(Self::NewLines(x))
                ]
            })
            .boxed()
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (character, count) = match self {
            Self::Spaces(x) => (' ', *x),
            Self::Tabs(x) => ('\t', *x),
            Self::NewLines(x) => ('\n', *x),
        };

        for _ in 0..count {
            f.write_char(character)?;
        }

        Ok(())
    }
}

/// Represents an input for the [`super::TokenStream`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenStream {
    /// The generated tokens, each followed by its separator in the rendered source.
    pub parts: Vec<(token::tests::Token, Separator)>,
}

impl Arbitrary for TokenStream {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(
            (token::tests::Token::arbitrary(), Separator::arbitrary()),
            0..=12,
        )
        .prop_map(|parts| Self { parts })
        .boxed()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (token, separator) in &self.parts {
            Display::fmt(token, f)?;
            Display::fmt(separator, f)?;
        }

        Ok(())
    }
}

impl Input<&super::TokenStream> for &TokenStream {
    fn assert(self, output: &super::TokenStream) -> TestCaseResult {
        prop_assert_eq!(output.len(), self.parts.len() + 1);

        for ((input, _), output_token) in self.parts.iter().zip(output.iter()) {
            input.assert(output_token)?;
        }

        prop_assert!(output[self.parts.len()].is_end_of_input());

        Ok(())
    }
}

fn tokenize(source: &str) -> Result<super::TokenStream, TestCaseError> {
    let source_file = SourceFile::temp(source)?;

    super::TokenStream::tokenize(&source_file)
        .map_err(|error| TestCaseError::fail(error.to_string()))
}

proptest! {
    #[test]
    fn token_stream_test(
        input in TokenStream::arbitrary()
    ) {
        let source = input.to_string();
        let token_stream = tokenize(&source)?;

        input.assert(&token_stream)?;
    }

    #[test]
    fn tokens_partition_the_non_whitespace_input(
        input in TokenStream::arbitrary()
    ) {
        let source = input.to_string();
        let token_stream = tokenize(&source)?;

        let mut reconstructed = String::new();
        for token in token_stream.iter() {
            match token {
                Token::Punctuation(punctuation) => {
                    reconstructed.push(punctuation.kind.as_char());
                }
                token => reconstructed.push_str(token.text()),
            }
        }

        let stripped = source
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
            .collect::<String>();

        prop_assert_eq!(reconstructed, stripped);
    }
}

#[test]
fn whitespace_only_input_yields_a_lone_end_of_input() {
    let source_file = SourceFile::temp(" \t\n  ").unwrap();
    let token_stream = super::TokenStream::tokenize(&source_file).unwrap();

    assert_eq!(token_stream.len(), 1);
    assert!(token_stream[0].is_end_of_input());
}

#[test]
fn tokens_appear_in_source_order() {
    let source_file = SourceFile::temp("(1+2)").unwrap();
    let token_stream = super::TokenStream::tokenize(&source_file).unwrap();

    assert_eq!(token_stream.len(), 6);
    assert_eq!(
        token_stream[0].as_punctuation().unwrap().kind,
        PunctuationKind::OpenParen
    );
    assert_eq!(token_stream[1].as_number().unwrap().text, "1");
    assert_eq!(
        token_stream[2].as_punctuation().unwrap().kind,
        PunctuationKind::Plus
    );
    assert_eq!(token_stream[3].as_number().unwrap().text, "2");
    assert_eq!(
        token_stream[4].as_punctuation().unwrap().kind,
        PunctuationKind::CloseParen
    );
    assert!(token_stream[5].is_end_of_input());
}

#[test]
fn token_limit_is_enforced() {
    let source_file = SourceFile::temp("1 2 3 4 5").unwrap();

    let error = super::TokenStream::tokenize_with_limit(&source_file, 3).unwrap_err();
    assert_eq!(error.as_capacity_exceeded().unwrap().limit, 3);
}

#[test]
fn stream_that_fits_the_limit_is_complete() {
    let source_file = SourceFile::temp("1 2 3").unwrap();

    // three numbers plus the end-of-input sentinel
    let token_stream = super::TokenStream::tokenize_with_limit(&source_file, 4).unwrap();
    assert_eq!(token_stream.len(), 4);
    assert!(token_stream[3].is_end_of_input());
}

#[test]
fn lexical_error_aborts_the_stream() {
    let source_file = SourceFile::temp("a\n@").unwrap();

    let error = super::TokenStream::tokenize(&source_file).unwrap_err();
    let Error::Lexical(lexical_error) = error else {
        panic!("expected a lexical error, got {error:?}");
    };

    assert_eq!(lexical_error.character, '@');
    assert_eq!(lexical_error.line, 2);
}

#[test]
fn dissolve_preserves_the_token_order() {
    let source_file = SourceFile::temp("a = 1;").unwrap();
    let token_stream = super::TokenStream::tokenize(&source_file).unwrap();

    let tokens = token_stream.clone().dissolve();
    assert_eq!(tokens.len(), token_stream.len());
    assert!(tokens.last().unwrap().is_end_of_input());
}
