//! Token types produced by the lexer
//!
//! A [`Token`] is a classified slice of the input text. The engine itself
//! only ever fabricates [`TokenKind::Error`] tokens (during recovery from
//! unmatched input); every other kind comes from the rule table's emitters.

use serde::{Deserialize, Serialize};

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Input no rule matched
    Error,
    /// Plain text
    Text,
    /// Spaces, tabs, newlines
    Whitespace,
    /// Line or block comment
    Comment,
    /// Reserved word
    Keyword,
    /// Identifier
    Name,
    /// Literal value of unspecified shape
    Literal,
    /// Numeric literal
    Number,
    /// String literal
    String,
    /// Operator
    Operator,
    /// Bracket, delimiter, or other punctuation
    Punctuation,
    /// Anything that fits no other class
    Other,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Text => write!(f, "text"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::Comment => write!(f, "comment"),
            Self::Keyword => write!(f, "keyword"),
            Self::Name => write!(f, "name"),
            Self::Literal => write!(f, "literal"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Operator => write!(f, "operator"),
            Self::Punctuation => write!(f, "punctuation"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A classified slice of input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lexical class
    pub kind: TokenKind,
    /// The matched text
    pub value: String,
}

impl Token {
    /// Create a new token
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Whether this token came from error recovery
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
