//! Lexer configuration and per-call tokenization options

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for a lexer
///
/// The three boolean fields control regex semantics for every rule in the
/// table. Multiline mode is on by default (hence `not_multiline`), matching
/// how rule tables are usually written: `^` and `$` anchor at line
/// boundaries. `name`, `priority`, and `options` are carried for external
/// collaborators (registries, detection policies) and not interpreted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Display name of the lexer
    #[serde(default)]
    pub name: String,
    /// Tie-break priority when several lexers score equally against a text
    #[serde(default)]
    pub priority: f32,
    /// Compile patterns case-insensitively
    #[serde(default)]
    pub case_insensitive: bool,
    /// Let `.` match newlines
    #[serde(default)]
    pub dot_all: bool,
    /// Disable multiline mode, anchoring `^`/`$` to the whole input instead
    /// of line boundaries
    #[serde(default)]
    pub not_multiline: bool,
    /// Free-form options not interpreted by the engine
    #[serde(default)]
    pub options: HashMap<String, String>,
}

impl Config {
    /// Create a configuration with the given display name and defaults
    /// everywhere else
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Regex flag string derived from the boolean fields
    pub(crate) fn flags(&self) -> String {
        let mut flags = String::new();
        if !self.not_multiline {
            flags.push('m');
        }
        if self.case_insensitive {
            flags.push('i');
        }
        if self.dot_all {
            flags.push('s');
        }
        flags
    }
}

/// Per-call tokenization options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeOptions {
    /// State to start scanning in
    #[serde(default = "default_state")]
    pub state: String,
}

fn default_state() -> String {
    "root".to_string()
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            state: default_state(),
        }
    }
}

impl TokenizeOptions {
    /// Options starting in the given state
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
        }
    }
}
