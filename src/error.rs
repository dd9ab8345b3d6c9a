//! Core error taxonomy: lexer, parser, and grammar-construction errors.
//!
//! These stay hand-rolled (manual `Display`, no `thiserror`) to match the
//! parsing core's dependency-light convention; the CLI's error type is the
//! one that reaches for `thiserror` (see `bin/basis.rs`).

use std::fmt::{Display, Formatter};

/// A malformed token. Carries the 1-based location of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl LexError {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {} column {}",
            self.message, self.line, self.column
        )
    }
}

impl std::error::Error for LexError {}

/// The top-level combinator failed to produce a parse tree. Reported as the
/// furthest-position diagnostic, already formatted by the parser driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// A grammar-construction invariant was violated (e.g. a `Forward` slot was
/// never filled in). Caught at grammar-build time, never at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationError {
    pub what: String,
    pub message: String,
}

impl ImplementationError {
    pub fn new(what: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            message: message.into(),
        }
    }
}

impl Display for ImplementationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImplementationError: {}: {}", self.what, self.message)
    }
}

impl std::error::Error for ImplementationError {}
