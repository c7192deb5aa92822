//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Styled};

use crate::source_file::SourceFile;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = match self.severity {
            Severity::Error => Styled::new("[error]:").color(Color::Red).bold(),
            Severity::Warning => Styled::new("[warning]:").color(Color::Yellow).bold(),
            Severity::Info => Styled::new("[info]:").color(Color::Green).bold(),
        };

        write!(f, "{log_header} {}", Styled::new(&self.display).bold())
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints a single line of the source code along with its
/// file location.
#[derive(Debug, Clone, Copy, new)]
pub struct SourceLineDisplay<'a> {
    /// The source file to print the line from.
    pub source_file: &'a SourceFile,

    /// The 1-based line number to print.
    pub line: usize,
}

impl Display for SourceLineDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(line_content) = self.source_file.get_line(self.line) else {
            return Ok(());
        };

        let gutter_width = get_digit(self.line);

        // prints the source location
        for _ in 0..gutter_width {
            write!(f, " ")?;
        }

        writeln!(
            f,
            "{} {}:{}",
            Styled::new("-->").color(Color::Cyan).bold(),
            self.source_file.full_path().display(),
            self.line
        )?;

        // prints the empty pipe
        for _ in 0..=gutter_width {
            write!(f, " ")?;
        }
        writeln!(f, "{}", Styled::new("┃").color(Color::Cyan).bold())?;

        // prints the line itself
        write!(
            f,
            "{} {} ",
            Styled::new(self.line).color(Color::Cyan).bold(),
            Styled::new("┃").color(Color::Cyan).bold(),
        )?;

        for char in line_content.chars() {
            // a tab is rendered as 4 spaces, line terminators are dropped
            if char == '\t' {
                write!(f, "    ")?;
            } else if char != '\n' && char != '\r' {
                write!(f, "{char}")?;
            }
        }
        writeln!(f)?;

        // prints the closing pipe
        for _ in 0..=gutter_width {
            write!(f, " ")?;
        }
        writeln!(f, "{}", Styled::new("┃").color(Color::Cyan).bold())
    }
}
