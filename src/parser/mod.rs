//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive-descent parser with
//! precedence climbing for binary and assignment operators and handles:
//!
//! - Literals, identifiers and grouped expressions
//! - Conditionals, closures, function definitions and extern declarations
//! - Call expressions and brace-delimited program blocks
//! - Delimited lists (parameters, arguments, block bodies) via one generic
//!   routine that tolerates a trailing separator
//!
//! Parsing is fail-fast: the first error aborts the whole parse and is
//! reported to the caller; there is no recovery or resynchronisation.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
