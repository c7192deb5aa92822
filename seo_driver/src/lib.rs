//! Contains the driver gluing the compiler phases to the operating system: argument parsing,
//! file I/O, diagnostics reporting, and the process exit code policy.

use std::{fs::File, io::Write, path::Path, process::ExitCode};

pub use clap::Parser;
use seo_base::{
    log::{Message, Severity, SourceLineDisplay},
    source_file::SourceFile,
};
use seo_lexical::token_stream::TokenStream;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(name = "seoc", about = "Seoggi compiler.")]
pub struct Argument {
    /// The input source file to compile.
    pub input: std::path::PathBuf,

    /// The file to write the compiled output to.
    pub output: std::path::PathBuf,
}

/// Runs the compiler with the given arguments.
///
/// Every failure path prints a diagnostic to the standard error stream and yields
/// [`ExitCode::FAILURE`]; the core phases themselves never terminate the process.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let source_file = match SourceFile::load(&argument.input) {
        Ok(source_file) => source_file,
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.input.display()),
            );

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let token_stream = match TokenStream::tokenize(&source_file) {
        Ok(token_stream) => token_stream,
        Err(error) => {
            eprintln!("{}", Message::new(Severity::Error, &error));

            if let Some(lexical_error) = error.as_lexical() {
                eprint!("{}", SourceLineDisplay::new(&source_file, lexical_error.line));
            }

            return ExitCode::FAILURE;
        }
    };

    match write_output(&argument.output, &token_stream) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.output.display()),
            );

            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

/// Writes the pass-through rendering of the token stream: every token that carries text is
/// written followed by a single space; punctuation and the end-of-input sentinel contribute
/// nothing.
fn write_output(path: &Path, token_stream: &TokenStream) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    for token in token_stream.iter() {
        let text = token.text();

        if !text.is_empty() {
            write!(file, "{text} ")?;
        }
    }

    Ok(())
}
