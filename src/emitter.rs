//! Emitters convert a rule match into a lazy token stream
//!
//! An [`Emitter`] is the strategy a rule uses to turn its captured groups
//! into tokens. A bare [`TokenKind`] is the base case: one token covering
//! the whole match. [`by_groups`] splits the match across its capture
//! groups, one emitter per group. [`using`] and [`using_self`] delegate the
//! entire matched text to another tokenization (an independent lexer, or
//! the current one re-entered at a given state), which is how one language
//! is embedded inside another's grammar.

use std::sync::Arc;

use crate::config::TokenizeOptions;
use crate::error::{Error, Result};
use crate::iterator::{concat, once_token, TokenStream};
use crate::lexer::RegexLexer;
use crate::token::TokenKind;

/// Strategy turning the groups of a successful match into a token stream
///
/// `groups[0]` is always the entire matched text; subsequent entries are
/// sub-captures, empty when a group did not participate in the match.
pub trait Emitter: Send + Sync {
    /// Emit tokens for the given match groups
    fn emit(&self, groups: &[String], lexer: &RegexLexer) -> Result<TokenStream>;
}

impl Emitter for TokenKind {
    fn emit(&self, groups: &[String], _lexer: &RegexLexer) -> Result<TokenStream> {
        let text = groups.first().cloned().unwrap_or_default();
        Ok(once_token(*self, text))
    }
}

impl From<TokenKind> for Arc<dyn Emitter> {
    fn from(kind: TokenKind) -> Self {
        Arc::new(kind)
    }
}

/// Emit each capture group through its paired emitter, in group order
///
/// The number of emitters must equal the number of capture groups in the
/// rule's pattern. The mismatch cannot be detected until the rule fires,
/// at which point it fails the tokenization with
/// [`Error::GroupCount`].
#[must_use]
pub fn by_groups(emitters: impl IntoIterator<Item = Arc<dyn Emitter>>) -> Arc<dyn Emitter> {
    Arc::new(ByGroups {
        emitters: emitters.into_iter().collect(),
    })
}

struct ByGroups {
    emitters: Vec<Arc<dyn Emitter>>,
}

impl Emitter for ByGroups {
    fn emit(&self, groups: &[String], lexer: &RegexLexer) -> Result<TokenStream> {
        let captures = groups.get(1..).unwrap_or_default();
        if captures.len() != self.emitters.len() {
            return Err(Error::GroupCount {
                expected: self.emitters.len(),
                actual: captures.len(),
            });
        }
        let mut streams = Vec::with_capacity(captures.len());
        for (emitter, group) in self.emitters.iter().zip(captures) {
            streams.push(emitter.emit(std::slice::from_ref(group), lexer)?);
        }
        Ok(concat(streams))
    }
}

/// Delegate the whole match to an independent lexer
///
/// The matched text is re-tokenized from scratch with `lexer` and
/// `options`; the resulting stream replaces the match. A lexer that fails
/// to start (a broken rule table discovered on its first use) fails the
/// surrounding tokenization with [`Error::Delegation`].
#[must_use]
pub fn using(lexer: RegexLexer, options: TokenizeOptions) -> Arc<dyn Emitter> {
    Arc::new(Using { lexer, options })
}

struct Using {
    lexer: RegexLexer,
    options: TokenizeOptions,
}

impl Emitter for Using {
    fn emit(&self, groups: &[String], _lexer: &RegexLexer) -> Result<TokenStream> {
        let text = groups.first().map_or("", String::as_str);
        self.lexer
            .tokenize(Some(self.options.clone()), text)
            .map_err(|err| Error::Delegation(err.to_string()))
    }
}

/// Delegate the whole match to the current lexer, re-entered at `state`
///
/// Like [`using`], but the sub-tokenization runs on the same engine that
/// is currently executing: the recursive-embedding case, e.g. a nesting
/// construct containing instances of its own language.
#[must_use]
pub fn using_self(state: impl Into<String>) -> Arc<dyn Emitter> {
    Arc::new(UsingSelf {
        state: state.into(),
    })
}

struct UsingSelf {
    state: String,
}

impl Emitter for UsingSelf {
    fn emit(&self, groups: &[String], lexer: &RegexLexer) -> Result<TokenStream> {
        let text = groups.first().map_or("", String::as_str);
        lexer
            .tokenize(Some(TokenizeOptions::new(self.state.as_str())), text)
            .map_err(|err| Error::Delegation(err.to_string()))
    }
}
