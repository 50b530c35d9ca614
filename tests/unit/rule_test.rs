//! Integration tests for rule tables and the word-alternation helper

use statelex::rule::{words, Rule, Rules};
use statelex::token::TokenKind;

use crate::common::{lex, lexer, pairs};

#[test]
fn test_rules_from_iterator() {
    let rules: Rules = vec![
        ("root".to_string(), vec![Rule::new(r"\w+")]),
        ("string".to_string(), vec![Rule::new("\"")]),
    ]
    .into_iter()
    .collect();
    assert_eq!(rules.len(), 2);
    assert!(rules.contains_state("root"));
    assert!(rules.contains_state("string"));
}

#[test]
fn test_rules_get_preserves_declaration_order() {
    let rules = Rules::new().state(
        "root",
        vec![Rule::new("first"), Rule::new("second"), Rule::new("third")],
    );
    let patterns: Vec<&str> = rules
        .get("root")
        .unwrap()
        .iter()
        .map(Rule::pattern)
        .collect();
    assert_eq!(patterns, vec!["first", "second", "third"]);
}

#[test]
fn test_words_builds_bounded_alternation() {
    assert_eq!(words(r"\b", r"\b", &["if", "else"]), r"\b(if|else)\b");
}

#[test]
fn test_words_escapes_literals() {
    assert_eq!(words("", "", &["+=", "*"]), r"(\+=|\*)");
}

#[test]
fn test_words_requires_whole_keyword() {
    let lexer = lexer(Rules::new().state(
        "root",
        vec![
            Rule::new(words(r"\b", r"\b", &["if", "else"])).emit(TokenKind::Keyword),
            Rule::new(r"\w+").emit(TokenKind::Name),
            Rule::new(r"\s+").emit(TokenKind::Whitespace),
        ],
    ));
    // "ifelse" must not match as the keyword "if": there is no word
    // boundary after the "if" prefix.
    assert_eq!(
        pairs(&lex(&lexer, "ifelse if")),
        vec![
            (TokenKind::Name, "ifelse"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Keyword, "if"),
        ]
    );
}

#[test]
fn test_words_matches_escaped_operator_literally() {
    let lexer = lexer(Rules::new().state(
        "root",
        vec![
            Rule::new(words("", "", &["++", "+"])).emit(TokenKind::Operator),
            Rule::new(r"\w+").emit(TokenKind::Name),
        ],
    ));
    assert_eq!(
        pairs(&lex(&lexer, "a++b")),
        vec![
            (TokenKind::Name, "a"),
            (TokenKind::Operator, "++"),
            (TokenKind::Name, "b"),
        ]
    );
}
