//! Contains the ANSI color/style codes used when rendering diagnostics.

use std::fmt::Display;

/// Represents a terminal color applicable to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that wraps a displayable object with an ANSI color and an
/// optional bold style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Styled<T> {
    display: T,
    color: Option<Color>,
    bold: bool,
}

impl<T> Styled<T> {
    /// Creates a new unstyled wrapper around the given displayable object.
    pub fn new(display: T) -> Self {
        Self {
            display,
            color: None,
            bold: false,
        }
    }

    /// Applies the given color to the text.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Applies the bold style to the text.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bold {
            write!(f, "\x1B[1m")?;
        }

        if let Some(color) = self.color {
            write!(f, "{}", color.code())?;
        }

        write!(f, "{}\x1B[0m", self.display)
    }
}
