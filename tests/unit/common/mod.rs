//! Common test utilities

use statelex::config::Config;
use statelex::lexer::RegexLexer;
use statelex::rule::Rules;
use statelex::token::{Token, TokenKind};

/// Initialize test logging; safe to call from every test
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a lexer with a default configuration
pub fn lexer(rules: Rules) -> RegexLexer {
    RegexLexer::new(Config::default(), rules).expect("valid rule table")
}

/// Tokenize eagerly, panicking on fatal errors
pub fn lex(lexer: &RegexLexer, text: &str) -> Vec<Token> {
    lexer
        .tokenize_to_vec(None, text)
        .expect("tokenization succeeds")
}

/// Collapse tokens into `(kind, value)` pairs for compact assertions
pub fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.value.as_str()))
        .collect()
}
