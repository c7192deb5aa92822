//! Contains the code related to the source code input.

use std::{
    fmt::Display,
    fs,
    ops::Range,
    path::{Path, PathBuf},
    sync::Arc,
};

use getset::Getters;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// Represents a single source code unit fed to the compiler.
///
/// The content is immutable after construction and is shared across the compilation phases via
/// [`Arc`].
#[derive(Debug, Getters)]
pub struct SourceFile {
    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,

    content: String,
    lines: Vec<Range<usize>>,
}

impl SourceFile {
    /// Creates a new source file from an already-loaded string.
    #[must_use]
    pub fn new(full_path: PathBuf, content: String) -> Arc<Self> {
        let lines = get_line_byte_positions(&content);
        Arc::new(Self {
            full_path,
            content,
            lines,
        })
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    /// Gets the line of the source file at the given line number.
    ///
    /// The line number starts at 1. The returned slice includes the line terminator, if any.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| &self.content[range.clone()])
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Loads the source file at the given path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when reading the file.
    /// - [`Error::Utf8Error`]: The file content is not valid UTF-8.
    pub fn load(path: &Path) -> Result<Arc<Self>, Error> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)?;
        Ok(Self::new(path.to_owned(), content))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating, writing to, or reading back the
    ///   temporary file.
    /// - [`Error::Utf8Error`]: The written content is not valid UTF-8.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("seo")
            .suffix(".seo")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;

        Self::load(tempfile.path())
    }
}

/// Computes the byte range of every line in the text, line terminators included.
///
/// Recognizes `\n`, `\r\n`, and a lone `\r` as line breaks. The byte-wise scan is sound for
/// UTF-8 input since no multi-byte sequence contains the `\n`/`\r` bytes.
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                ranges.push(start..index + 1);
                index += 1;
                start = index;
            }
            b'\r' => {
                let end = if bytes.get(index + 1) == Some(&b'\n') {
                    index + 2
                } else {
                    index + 1
                };

                ranges.push(start..end);
                index = end;
                start = end;
            }
            _ => index += 1,
        }
    }

    ranges.push(start..text.len());
    ranges
}
