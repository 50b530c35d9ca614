//! Error types for lexer construction, compilation, and tokenization
//!
//! Unmatched input is never an error: the scanner recovers by emitting
//! single-character error tokens and always reaches the end of the input.
//! The variants here cover the failures that have no local recovery: a
//! broken rule table, an invalid pattern, a failed mutator, or a delegated
//! sub-lexer that could not start.

use thiserror::Error;

/// Result alias for lexer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or running a lexer
#[derive(Debug, Error)]
pub enum Error {
    /// The rule table has no `"root"` state
    #[error("no \"root\" state in rule table")]
    MissingRootState,

    /// A rule pattern failed to compile
    ///
    /// Patterns are compiled lazily, so this surfaces on the first
    /// tokenization rather than at construction.
    #[error("failed to compile rule {state}.{index}: {source}")]
    RuleCompile {
        /// State the broken rule belongs to
        state: String,
        /// Position of the broken rule within its state
        index: usize,
        /// Underlying regex syntax error
        #[source]
        source: Box<regex::Error>,
    },

    /// A group emitter was declared with a different number of emitters
    /// than the capture groups its rule's match produced
    #[error("emitter count mismatch: {expected} emitters for {actual} capture groups")]
    GroupCount {
        /// Number of emitters declared
        expected: usize,
        /// Number of capture groups the match produced
        actual: usize,
    },

    /// A mutator failed while rewriting the scan state
    #[error("mutator failed: {0}")]
    Mutation(String),

    /// A delegated sub-tokenization failed to start
    #[error("sub-lexer failed to start: {0}")]
    Delegation(String),
}
