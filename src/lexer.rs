//! The regex lexer engine and its scan loop
//!
//! A [`RegexLexer`] is built once from a [`Config`] and a [`Rules`] table,
//! compiles its patterns on first use, and is read-only from then on. Each
//! [`RegexLexer::tokenize`] call produces an independent [`LexerState`]
//! scan cursor wrapped in a lazy token stream; pulling the stream drives
//! the scan.
//!
//! # Examples
//!
//! ```
//! use statelex::config::Config;
//! use statelex::lexer::RegexLexer;
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
//! let lexer = RegexLexer::new(Config::new("digits"), rules).unwrap();
//! let tokens = lexer.tokenize_to_vec(None, "1 2").unwrap();
//! assert_eq!(tokens.len(), 3);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use log::{debug, trace};
use regex::Regex;

use crate::config::{Config, TokenizeOptions};
use crate::emitter::Emitter;
use crate::error::{Error, Result};
use crate::iterator::TokenStream;
use crate::mutator::{ContextBag, Mutator};
use crate::rule::Rules;
use crate::token::{Token, TokenKind};

/// Scoring hook estimating how well a text fits this lexer's grammar
type Analyser = Box<dyn Fn(&str) -> f32 + Send + Sync>;

/// A rule with its compiled, anchored matcher
struct CompiledRule {
    emitter: Option<Arc<dyn Emitter>>,
    mutator: Option<Arc<dyn Mutator>>,
    regex: Regex,
}

type CompiledRules = HashMap<String, Vec<CompiledRule>>;

/// The regex lexer engine
///
/// A cheap-to-clone shared handle: clones tokenize through the same
/// compiled rule table, and independent tokenizations may run in parallel.
/// The only mutation after construction is the one-time lazy compilation,
/// performed under a lock on first use.
#[derive(Clone)]
pub struct RegexLexer {
    inner: Arc<Inner>,
}

struct Inner {
    config: Config,
    flags: String,
    rules: Rules,
    compiled: OnceLock<CompiledRules>,
    compile_lock: Mutex<()>,
    analyser: OnceLock<Analyser>,
}

impl RegexLexer {
    /// Create a lexer from a configuration and a rule table
    ///
    /// The table must contain a `"root"` state. Pattern validity is not
    /// checked here: compilation is deferred to the first tokenization, so
    /// tables that register many lexers pay nothing for the ones never
    /// used.
    pub fn new(config: Config, rules: Rules) -> Result<Self> {
        if !rules.contains_state("root") {
            return Err(Error::MissingRootState);
        }
        let flags = config.flags();
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                flags,
                rules,
                compiled: OnceLock::new(),
                compile_lock: Mutex::new(()),
                analyser: OnceLock::new(),
            }),
        })
    }

    /// Attach the content-analysis scoring hook
    ///
    /// The hook is used by external detection logic to estimate how well
    /// unclassified text fits this grammar. It can be attached once; later
    /// attachments are ignored.
    #[must_use]
    pub fn set_analyser(self, analyser: impl Fn(&str) -> f32 + Send + Sync + 'static) -> Self {
        let _ = self.inner.analyser.set(Box::new(analyser));
        self
    }

    /// The lexer's configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Score how well `text` fits this lexer's grammar
    ///
    /// Returns the attached hook's score clamped to `[0.0, 1.0]`, or `0.0`
    /// when no hook is attached.
    #[must_use]
    pub fn analyse_text(&self, text: &str) -> f32 {
        self.inner
            .analyser
            .get()
            .map_or(0.0, |analyse| analyse(text).clamp(0.0, 1.0))
    }

    /// Tokenize `text`, returning a lazy token stream
    ///
    /// `options` defaults to starting in the `"root"` state. The stream
    /// yields `Ok` tokens covering every character of the input (unmatched
    /// input becomes single-character [`TokenKind::Error`] tokens); a
    /// mutator failure, emitter contract violation, or delegation failure
    /// yields one fatal `Err` item and ends the stream.
    ///
    /// The returned stream is single-consumer and must not outlive the
    /// caller's interest: dropping it abandons the remaining scan with no
    /// buffered output lost.
    pub fn tokenize(&self, options: Option<TokenizeOptions>, text: &str) -> Result<TokenStream> {
        self.ensure_compiled()?;
        let options = options.unwrap_or_default();
        Ok(Box::new(LexerState::new(self.clone(), options.state, text)))
    }

    /// Tokenize `text` eagerly into a vector
    ///
    /// Drains the stream, stopping at and returning the first fatal error.
    pub fn tokenize_to_vec(
        &self,
        options: Option<TokenizeOptions>,
        text: &str,
    ) -> Result<Vec<Token>> {
        self.tokenize(options, text)?.collect()
    }

    /// Compile every rule of every state, exactly once per engine
    ///
    /// Patterns are anchored to the scan position and decorated with the
    /// flag string derived from the configuration. A single malformed
    /// pattern fails the whole compile and publishes nothing, so later
    /// calls fail identically instead of observing a partial table.
    fn ensure_compiled(&self) -> Result<()> {
        if self.inner.compiled.get().is_some() {
            return Ok(());
        }
        let guard = self
            .inner
            .compile_lock
            .lock()
            .expect("compile lock poisoned");
        if self.inner.compiled.get().is_some() {
            return Ok(());
        }

        let mut table = CompiledRules::with_capacity(self.inner.rules.len());
        let mut total = 0_usize;
        for (state, rules) in self.inner.rules.states() {
            let mut compiled = Vec::with_capacity(rules.len());
            for (index, rule) in rules.iter().enumerate() {
                let pattern = anchored(&self.inner.flags, rule.pattern());
                let regex = Regex::new(&pattern).map_err(|source| Error::RuleCompile {
                    state: state.to_string(),
                    index,
                    source: Box::new(source),
                })?;
                compiled.push(CompiledRule {
                    emitter: rule.emitter.clone(),
                    mutator: rule.mutator.clone(),
                    regex,
                });
            }
            total += compiled.len();
            table.insert(state.to_string(), compiled);
        }
        debug!(
            "compiled {} rules across {} states for lexer {:?}",
            total,
            table.len(),
            self.inner.config.name
        );
        let _ = self.inner.compiled.set(table);
        drop(guard);
        Ok(())
    }

    /// Compiled rules of a state; `None` for a state the table lacks
    fn rules_for(&self, state: &str) -> Option<&[CompiledRule]> {
        self.inner
            .compiled
            .get()
            .and_then(|table| table.get(state))
            .map(Vec::as_slice)
    }
}

impl std::fmt::Debug for RegexLexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexLexer")
            .field("name", &self.inner.config.name)
            .field("states", &self.inner.rules.len())
            .field("compiled", &self.inner.compiled.get().is_some())
            .finish()
    }
}

/// Anchor a pattern to the start of the remaining input, under `flags`
///
/// The anchor sits outside the flag group, so `^` here always means the
/// scan position even when multiline mode is on for the pattern body.
fn anchored(flags: &str, pattern: &str) -> String {
    if flags.is_empty() {
        format!("^(?:{pattern})")
    } else {
        format!("^(?{flags}:{pattern})")
    }
}

/// A successful match, detached from the rule table
struct Matched {
    index: usize,
    groups: Vec<String>,
    emitter: Option<Arc<dyn Emitter>>,
    mutator: Option<Arc<dyn Mutator>>,
}

/// The live scan cursor for one tokenization
///
/// Created fresh per [`RegexLexer::tokenize`] call and exclusively owned
/// by the token stream it backs. Mutators receive it mutably and may
/// rewrite the state stack and the context bag; everything else is
/// read-only to them.
pub struct LexerState {
    lexer: RegexLexer,
    text: String,
    pos: usize,
    stack: Vec<String>,
    rule: usize,
    groups: Vec<String>,
    context: ContextBag,
    pending: Vec<TokenStream>,
    failed: bool,
}

impl LexerState {
    fn new(lexer: RegexLexer, state: String, text: &str) -> Self {
        Self {
            lexer,
            text: text.to_string(),
            pos: 0,
            stack: vec![state],
            rule: 0,
            groups: Vec::new(),
            context: ContextBag::new(),
            pending: Vec::new(),
            failed: false,
        }
    }

    /// Current byte position in the input, always on a character boundary
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The input being scanned
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The state stack, bottom first
    #[must_use]
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// The active state, if the stack is non-empty
    #[must_use]
    pub fn current_state(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Push a state onto the stack
    pub fn push_state(&mut self, state: impl Into<String>) {
        self.stack.push(state.into());
    }

    /// Pop the top state off the stack
    ///
    /// Underflow is a mutator contract violation and fails the
    /// tokenization.
    pub fn pop_state(&mut self) -> Result<String> {
        self.stack
            .pop()
            .ok_or_else(|| Error::Mutation("state stack underflow".to_string()))
    }

    /// Capture groups of the most recent match; `groups()[0]` is the whole
    /// match
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Index of the most recently matched rule within its state
    #[must_use]
    pub const fn rule_index(&self) -> usize {
        self.rule
    }

    /// Scratch storage for mutators
    #[must_use]
    pub const fn context(&self) -> &ContextBag {
        &self.context
    }

    /// Mutable scratch storage for mutators
    pub const fn context_mut(&mut self) -> &mut ContextBag {
        &mut self.context
    }

    /// First-listed rule of the active state that matches at the cursor
    fn match_at_cursor(&self) -> Option<Matched> {
        let remaining = &self.text[self.pos..];
        let state = self.stack.last()?;
        let rules = self.lexer.rules_for(state)?;
        rules.iter().enumerate().find_map(|(index, rule)| {
            rule.regex.captures(remaining).map(|captures| Matched {
                index,
                groups: captures
                    .iter()
                    .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                    .collect(),
                emitter: rule.emitter.clone(),
                mutator: rule.mutator.clone(),
            })
        })
    }

    /// Consume one character as an error token
    fn recover_one_char(&mut self) -> Option<Token> {
        let ch = self.text[self.pos..].chars().next()?;
        trace!("no rule matched at byte {}, emitting error token", self.pos);
        self.pos += ch.len_utf8();
        Some(Token::new(TokenKind::Error, ch.to_string()))
    }
}

impl Iterator for LexerState {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            // A pending sub-stream always supplies the next token; the
            // innermost (most recently pushed) one drains first.
            while let Some(stream) = self.pending.last_mut() {
                match stream.next() {
                    Some(Err(err)) => {
                        self.failed = true;
                        return Some(Err(err));
                    }
                    Some(token) => return Some(token),
                    None => {
                        self.pending.pop();
                    }
                }
            }

            if self.pos >= self.text.len() || self.stack.is_empty() {
                return None;
            }

            let Some(matched) = self.match_at_cursor() else {
                return self.recover_one_char().map(Ok);
            };

            self.rule = matched.index;
            self.groups = matched.groups;
            let width = self.groups.first().map_or(0, String::len);
            self.pos += width;
            trace!(
                "state {:?}: rule {} matched {width} bytes",
                self.current_state(),
                self.rule
            );

            // A zero-width match can only make progress through its
            // mutator moving the state machine; remember where the stack
            // stood so we can tell.
            let stack_marker =
                (width == 0).then(|| (self.stack.len(), self.stack.last().cloned()));

            if let Some(mutator) = matched.mutator {
                if let Err(err) = mutator.mutate(self) {
                    self.failed = true;
                    return Some(Err(err));
                }
            }

            if let Some(before) = stack_marker {
                let after = (self.stack.len(), self.stack.last().cloned());
                if before == after {
                    // Zero width and the state machine did not move:
                    // recover as if nothing matched, so the scan always
                    // terminates.
                    return self.recover_one_char().map(Ok);
                }
            }

            if let Some(emitter) = matched.emitter {
                match emitter.emit(&self.groups, &self.lexer) {
                    Ok(stream) => self.pending.push(stream),
                    Err(err) => {
                        self.failed = true;
                        return Some(Err(err));
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for LexerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexerState")
            .field("pos", &self.pos)
            .field("stack", &self.stack)
            .field("rule", &self.rule)
            .field("pending", &self.pending.len())
            .field("failed", &self.failed)
            .finish()
    }
}
