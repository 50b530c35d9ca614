//! Lazy token streams and their concatenation
//!
//! A [`TokenStream`] is a single-consumer pull source: each `next()` call
//! produces the next token or `None` at end-of-stream. Nothing is buffered
//! ahead, so a caller that stops pulling simply abandons the remaining
//! work. Streams are composed by [`concat`], which drains an ordered list
//! of sub-streams without call-stack recursion.

use std::collections::VecDeque;

use crate::error::Result;
use crate::token::{Token, TokenKind};

/// A lazy, single-consumer stream of tokens
///
/// `None` signals end-of-stream. Fatal failures (mutator errors, emitter
/// contract violations, delegation startup failures) surface as a single
/// `Err` item, after which the stream yields `None`.
pub type TokenStream = Box<dyn Iterator<Item = Result<Token>> + Send>;

/// A stream yielding no tokens
#[must_use]
pub fn empty() -> TokenStream {
    Box::new(std::iter::empty())
}

/// A stream yielding exactly one token
#[must_use]
pub fn once_token(kind: TokenKind, value: impl Into<String>) -> TokenStream {
    Box::new(std::iter::once(Ok(Token::new(kind, value))))
}

/// Concatenate streams, draining each in order before advancing to the
/// next
#[must_use]
pub fn concat(streams: Vec<TokenStream>) -> TokenStream {
    Box::new(Concat {
        streams: streams.into(),
    })
}

struct Concat {
    streams: VecDeque<TokenStream>,
}

impl Iterator for Concat {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(stream) = self.streams.front_mut() {
            if let Some(item) = stream.next() {
                return Some(item);
            }
            self.streams.pop_front();
        }
        None
    }
}
