//! Parameterized tests using test-case
//!
//! These tests run the same logic across tables of inputs.

use statelex::rule::words;
use statelex::token::TokenKind;
use test_case::test_case;

// =============================================================================
// Word-alternation helper
// =============================================================================

#[test_case(r"\b", r"\b", &["if"], r"\b(if)\b" ; "single word with boundaries")]
#[test_case("", "", &["a", "b"], "(a|b)" ; "bare alternation")]
#[test_case("", "", &["a.b"], r"(a\.b)" ; "dot is escaped")]
#[test_case("(?i)", "", &["select"], "(?i)(select)" ; "prefix spliced verbatim")]
#[test_case("", r"\s", &["let"], r"(let)\s" ; "suffix spliced verbatim")]
fn test_words(prefix: &str, suffix: &str, list: &[&str], expected: &str) {
    assert_eq!(words(prefix, suffix, list), expected);
}

// =============================================================================
// Token kinds
// =============================================================================

#[test_case(TokenKind::Error, "error" ; "error kind")]
#[test_case(TokenKind::Whitespace, "whitespace" ; "whitespace kind")]
#[test_case(TokenKind::Number, "number" ; "number kind")]
#[test_case(TokenKind::Operator, "operator" ; "operator kind")]
#[test_case(TokenKind::Other, "other" ; "other kind")]
fn test_kind_display(kind: TokenKind, expected: &str) {
    assert_eq!(kind.to_string(), expected);
}

#[test_case(TokenKind::Error, true ; "error is error")]
#[test_case(TokenKind::Name, false ; "name is not error")]
fn test_kind_is_error(kind: TokenKind, expected: bool) {
    assert_eq!(
        statelex::token::Token::new(kind, "x").is_error(),
        expected
    );
}
