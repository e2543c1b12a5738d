use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Always the last token of a scan.
    Eof,
    /// Text that matched no sigil and no keyword.
    Invalid,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// Division. Has a name but no source text maps to it.
    Div,
    /// A maximal run of whitespace.
    Whitespace,
    /// `(`
    LeftBracket,
    /// `)`
    RightBracket,
    /// `=`
    Assign,
    /// `$name`
    Reference,
    /// `@name`
    Declare,
    /// Digit run without a decimal point.
    Int,
    /// Digit run with at least one decimal point.
    Float,
    /// Plain identifier. Reserved, never produced.
    Ident,
    /// `PRINT`
    Print,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Eof,
        Self::Invalid,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Whitespace,
        Self::LeftBracket,
        Self::RightBracket,
        Self::Assign,
        Self::Reference,
        Self::Declare,
        Self::Int,
        Self::Float,
        Self::Ident,
        Self::Print,
    ];

    /// Descriptor name used when rendering tokens.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Invalid => "INVTOK",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Whitespace => "WS",
            Self::LeftBracket => "LBRACKET",
            Self::RightBracket => "RBRACKET",
            Self::Assign => "ASSIGN",
            Self::Reference => "REFERENCE",
            Self::Declare => "DECLARE",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Ident => "IDENT",
            Self::Print => "PRINT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token: its kind plus the payload text, if the kind carries one.
///
/// Literals carry their digits (`INT:42`), sigil tokens carry the variable
/// name without the sigil (`REFERENCE:x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
}

impl Token {
    /// Token without a payload.
    #[must_use]
    pub const fn new(kind: TokenKind) -> Self {
        Self { kind, value: None }
    }

    /// Token carrying `value` as its payload.
    #[must_use]
    pub fn with_value(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{value}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
