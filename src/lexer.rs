use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::token::{Token, TokenKind};

/// Sigil introducing a variable reference (`$x`).
const REFERENCE_SIGIL: char = '$';
/// Sigil introducing a variable declaration (`@x`).
const DECLARE_SIGIL: char = '@';

/// Exact source text to token kind, for anything that is not a sigil
/// token or a numeric literal.
///
/// Besides the operators and `PRINT`, every kind's own name is accepted
/// as source text (`ADD`, `WS`, ...), except `EOF` and `IDENT`. There is
/// deliberately no entry for `/`.
static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("+", TokenKind::Add);
    map.insert("-", TokenKind::Sub);
    map.insert("*", TokenKind::Mul);
    map.insert("=", TokenKind::Assign);
    map.insert("(", TokenKind::LeftBracket);
    map.insert(")", TokenKind::RightBracket);
    map.insert(" ", TokenKind::Whitespace);
    for kind in TokenKind::ALL {
        if !matches!(kind, TokenKind::Eof | TokenKind::Ident) {
            map.insert(kind.name(), kind);
        }
    }
    map
});

/// Space, tab, or newline.
#[must_use]
pub const fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n')
}

/// ASCII letter.
#[must_use]
pub const fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

/// ASCII digit.
#[must_use]
pub const fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Look up the fixed token kind for an exact piece of source text.
#[must_use]
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Tokenize a source string into a sequence of tokens.
///
/// Never fails: text that is neither a sigil token, a number, nor a
/// keyword becomes an `INVTOK` token. The result always ends with
/// `WS, EOF`.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    scan(input.as_bytes())
}

/// Like [`tokenize`], but calls `on_unrecognized` with the text of every
/// `INVTOK` token at the moment it is classified.
#[must_use]
pub fn tokenize_with<F>(input: &str, on_unrecognized: F) -> Vec<Token>
where
    F: FnMut(&str),
{
    scan_with(input.as_bytes(), on_unrecognized)
}

/// Tokenize raw source bytes. Input need not be valid UTF-8; payloads
/// are decoded lossily.
#[must_use]
pub fn scan(input: &[u8]) -> Vec<Token> {
    scan_with(input, |_| {})
}

/// Byte-level [`tokenize_with`].
#[must_use]
pub fn scan_with<F>(input: &[u8], on_unrecognized: F) -> Vec<Token>
where
    F: FnMut(&str),
{
    let tokens = Lexer::new(input, on_unrecognized).tokenize();
    debug!(tokens = tokens.len(), "scan complete");
    tokens
}

/// Decide the token for one flushed run of pending text.
///
/// Returns `None` when the text is unrecognized.
fn classify(text: &str) -> Option<Token> {
    if let Some(name) = text.strip_prefix(REFERENCE_SIGIL) {
        return Some(Token::with_value(TokenKind::Reference, name));
    }
    if let Some(name) = text.strip_prefix(DECLARE_SIGIL) {
        return Some(Token::with_value(TokenKind::Declare, name));
    }
    keyword(text).map(Token::new)
}

/// Byte cursor with one byte of lookahead and single-step backtracking.
/// End of input reads as `None`.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    const fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume the current byte. At end of input the cursor stays put.
    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    /// Un-read the most recently consumed byte.
    const fn step_back(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.input[start..self.pos]
    }
}

struct Lexer<'a, F> {
    cursor: Cursor<'a>,
    buffer: Vec<u8>,
    tokens: Vec<Token>,
    on_unrecognized: F,
}

impl<'a, F> Lexer<'a, F>
where
    F: FnMut(&str),
{
    const fn new(input: &'a [u8], on_unrecognized: F) -> Self {
        Self {
            cursor: Cursor::new(input),
            buffer: Vec::new(),
            tokens: Vec::new(),
            on_unrecognized,
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        loop {
            match self.cursor.peek() {
                Some(ch) if is_digit(ch) => {
                    self.flush();
                    self.scan_number();
                }
                Some(ch) if !is_whitespace(ch) => {
                    self.buffer.push(ch);
                    self.cursor.advance();
                }
                // whitespace or end of input
                _ => {
                    self.flush();
                    if self.scan_whitespace() {
                        break;
                    }
                }
            }
        }
        self.tokens
    }

    fn emit(&mut self, token: Token) {
        trace!(%token, "emit");
        self.tokens.push(token);
    }

    /// Consume a whitespace run and emit one `WS` for it. When the run
    /// reaches end of input, also emit `EOF` and return `true`.
    fn scan_whitespace(&mut self) -> bool {
        while self.cursor.peek().is_some_and(is_whitespace) {
            self.cursor.advance();
        }
        self.emit(Token::new(TokenKind::Whitespace));
        if self.cursor.peek().is_none() {
            self.emit(Token::new(TokenKind::Eof));
            return true;
        }
        false
    }

    /// Consume a run of digits and decimal points. The byte that ends the
    /// run is pushed back for the main loop.
    fn scan_number(&mut self) {
        let start = self.cursor.position();
        let mut has_point = false;

        while let Some(ch) = self.cursor.advance() {
            if ch == b'.' {
                has_point = true;
            } else if !is_digit(ch) {
                self.cursor.step_back();
                break;
            }
        }

        let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
        let kind = if has_point {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        self.emit(Token::with_value(kind, text));
    }

    /// Turn the pending text into exactly one token.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer).into_owned();
        self.buffer.clear();

        let token = classify(&text).unwrap_or_else(|| {
            debug!(text = %text, "unrecognized token");
            (self.on_unrecognized)(&text);
            Token::new(TokenKind::Invalid)
        });
        self.emit(token);
    }
}
