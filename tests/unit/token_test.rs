//! Integration tests for token types and their serialization

use statelex::config::Config;
use statelex::token::{Token, TokenKind};

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Error.to_string(), "error");
    assert_eq!(TokenKind::Keyword.to_string(), "keyword");
    assert_eq!(TokenKind::Punctuation.to_string(), "punctuation");
}

#[test]
fn test_token_new() {
    let token = Token::new(TokenKind::Number, "42");
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.value, "42");
    assert!(!token.is_error());
}

#[test]
fn test_token_is_error() {
    assert!(Token::new(TokenKind::Error, "?").is_error());
}

#[test]
fn test_token_display_prints_value() {
    assert_eq!(Token::new(TokenKind::Name, "ident").to_string(), "ident");
}

#[test]
fn test_token_serde_round_trip() {
    let token = Token::new(TokenKind::String, "\"hi\"");
    let json = serde_json::to_string(&token).unwrap();
    assert!(json.contains("\"kind\":\"string\""));
    let back: Token = serde_json::from_str(&json).unwrap();
    assert_eq!(back, token);
}

#[test]
fn test_config_serde_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert!(!config.case_insensitive);
    assert!(!config.dot_all);
    assert!(!config.not_multiline);
    assert!(config.name.is_empty());
    assert!(config.options.is_empty());
}
