//! Error types for compiling zone specifications.
//!
//! Compilation fails in exactly one of three stages, and every failure
//! carries the 1-based column at which it was detected:
//!
//! - [`LexError`] - malformed characters or literals
//! - [`ParseError`] - malformed structure
//! - [`BindError`] - well-formed, but names an unknown predicate or passes
//!   it arguments of the wrong shape
//!
//! [`CompileError`] unifies the three so callers that only want to report
//! "this zone text is bad, here is where" can handle one type.

use std::fmt;

use thiserror::Error;

/// Lexical error: the input contains a character or literal the tokenizer
/// cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at column {column}")]
pub struct LexError {
    pub message: String,
    pub column: usize,
}

impl LexError {
    pub fn new(message: impl Into<String>, column: usize) -> Self {
        LexError {
            message: message.into(),
            column,
        }
    }
}

/// Syntax error: the tokens do not form a single well-formed expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at column {column}")]
pub struct ParseError {
    pub message: String,
    pub column: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, column: usize) -> Self {
        ParseError {
            message: message.into(),
            column,
        }
    }
}

/// Semantic error: a call names an unknown predicate, or its arguments have
/// the wrong count, type or value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at column {column}")]
pub struct BindError {
    pub message: String,
    pub column: usize,
}

impl BindError {
    pub fn new(message: impl Into<String>, column: usize) -> Self {
        BindError {
            message: message.into(),
            column,
        }
    }
}

/// The compilation stage that rejected a zone specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Bind,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lex => write!(f, "lex"),
            Stage::Parse => write!(f, "parse"),
            Stage::Bind => write!(f, "bind"),
        }
    }
}

/// Any error produced while turning zone text into a bound condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("lex error at column {}: {}", .0.column, .0.message)]
    Lex(#[from] LexError),

    #[error("parse error at column {}: {}", .0.column, .0.message)]
    Parse(#[from] ParseError),

    #[error("bind error at column {}: {}", .0.column, .0.message)]
    Bind(#[from] BindError),
}

impl CompileError {
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Lex(_) => Stage::Lex,
            CompileError::Parse(_) => Stage::Parse,
            CompileError::Bind(_) => Stage::Bind,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CompileError::Lex(e) => &e.message,
            CompileError::Parse(e) => &e.message,
            CompileError::Bind(e) => &e.message,
        }
    }

    /// 1-based column of the offending character or token.
    pub fn column(&self) -> usize {
        match self {
            CompileError::Lex(e) => e.column,
            CompileError::Parse(e) => e.column,
            CompileError::Bind(e) => e.column,
        }
    }
}
