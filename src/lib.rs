//! statelex - A regex-based lexical tokenizer engine
//!
//! This library provides the core of a syntax-highlighting/lexing stack:
//! declarative state-machine rule tables, lazy one-time pattern
//! compilation, an error-recovering scan loop, composable emitters
//! (per-group emission, sub-lexer delegation), and lazy pull-based token
//! streams. Concrete per-language rule tables, styling, and detection
//! policy live in the applications built on top of it.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod emitter;
pub mod error;
pub mod iterator;
pub mod lexer;
pub mod mutator;
pub mod rule;
pub mod token;
