//! Declarative pattern rules and the state-machine rule table
//!
//! A [`Rules`] table maps state names to ordered lists of [`Rule`]s. The
//! order is the match-priority order: within a state the first rule whose
//! pattern matches at the scan position wins, regardless of match length.
//!
//! # Examples
//!
//! ```
//! use statelex::rule::{Rule, Rules};
//! use statelex::token::TokenKind;
//!
//! let rules = Rules::new().state(
//!     "root",
//!     vec![
//!         Rule::new(r"\d+").emit(TokenKind::Number),
//!         Rule::new(r"\s+").emit(TokenKind::Whitespace),
//!     ],
//! );
//! assert!(rules.contains_state("root"));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::emitter::Emitter;
use crate::mutator::Mutator;
use crate::token::TokenKind;

/// A single pattern rule: a regex pattern with an optional emitter and an
/// optional mutator
///
/// Immutable once constructed. The pattern is compiled lazily by the engine
/// on first use, anchored to the scan position.
#[derive(Clone)]
pub struct Rule {
    pub(crate) pattern: String,
    pub(crate) emitter: Option<Arc<dyn Emitter>>,
    pub(crate) mutator: Option<Arc<dyn Mutator>>,
}

impl Rule {
    /// Create a rule matching `pattern`, emitting nothing and mutating
    /// nothing
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            emitter: None,
            mutator: None,
        }
    }

    /// Emit the whole match as a single token of `kind`
    #[must_use]
    pub fn emit(self, kind: TokenKind) -> Self {
        self.emitter(Arc::new(kind))
    }

    /// Attach an emitter
    #[must_use]
    pub fn emitter(mut self, emitter: Arc<dyn Emitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Attach a mutator
    #[must_use]
    pub fn mutator(mut self, mutator: Arc<dyn Mutator>) -> Self {
        self.mutator = Some(mutator);
        self
    }

    /// The regex pattern text
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("emitter", &self.emitter.as_ref().map(|_| "..."))
            .field("mutator", &self.mutator.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Rule table: a mapping from state name to an ordered list of rules
///
/// Every table handed to the engine must contain a `"root"` state.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    states: HashMap<String, Vec<Rule>>,
}

impl Rules {
    /// Create an empty rule table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state and its rules, returning the table for chaining
    #[must_use]
    pub fn state(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.insert(name, rules);
        self
    }

    /// Add a state and its rules in place
    pub fn insert(&mut self, name: impl Into<String>, rules: Vec<Rule>) {
        self.states.insert(name.into(), rules);
    }

    /// Rules of a state, in match-priority order
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Rule]> {
        self.states.get(name).map(Vec::as_slice)
    }

    /// Whether the table contains a state
    #[must_use]
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Iterate over `(state name, rules)` pairs in no particular order
    pub fn states(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.states
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    /// Number of states
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the table has no states
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<(String, Vec<Rule>)> for Rules {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Rule>)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

/// Build a literal-alternation pattern fragment from a list of words
///
/// Each word is escaped, so regex metacharacters in the words match
/// literally. The prefix and suffix are spliced in verbatim, typically word
/// boundaries:
///
/// ```
/// use statelex::rule::words;
///
/// assert_eq!(words(r"\b", r"\b", &["if", "else"]), r"\b(if|else)\b");
/// ```
#[must_use]
pub fn words(prefix: &str, suffix: &str, words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|word| regex::escape(word)).collect();
    format!("{prefix}({}){suffix}", escaped.join("|"))
}
