//! Lexical scanner for a minimal toy language.
//!
//! Turns source text into a flat list of tokens: whitespace runs,
//! integer and float literals, `$reference` / `@declare` variables,
//! brackets, and a handful of operators and keywords. There is no
//! parser; the token list is the whole output.
//!
//! # Quick start
//!
//! ```
//! use toylang_lexer::{tokenize, format};
//!
//! let tokens = tokenize("$count = 5");
//! assert_eq!(
//!     format(&tokens),
//!     "REFERENCE:count, WS, ASSIGN, WS, INT:5, WS, EOF"
//! );
//! ```
//!
//! Unrecognized words never abort a scan. They become `INVTOK` tokens and
//! can be observed as they are classified:
//!
//! ```
//! use toylang_lexer::tokenize_with;
//!
//! let mut unknown = Vec::new();
//! let tokens = tokenize_with("foo", |text| unknown.push(text.to_owned()));
//! assert_eq!(unknown, ["foo"]);
//! assert_eq!(tokens.len(), 3);
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod formatter;
pub mod lexer;
pub mod token;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use formatter::format;
pub use lexer::{
    is_digit, is_letter, is_whitespace, keyword, scan, scan_with, tokenize, tokenize_with,
};
pub use token::{Token, TokenKind};

/// Source file read by the CLI when no path is given.
pub const DEFAULT_SOURCE: &str = "code.txt";

/// Errors surfaced by the library. Scanning itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file is missing or unreadable.
    #[error("Invalid File: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a source file into memory as raw bytes. The contents need not be
/// valid UTF-8.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file is missing or cannot be read.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
