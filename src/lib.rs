//! # arithmetic-engine
//!
//! arithmetic-engine evaluates textual arithmetic expressions such as
//! `(2 + 3) * -4.5` and returns their value as an `f64`.
//!
//! The engine supports number literals, the binary operators `+ - * /`, the
//! prefix operators `+` and `-`, and parentheses, with the usual precedence
//! and left associativity. It is a pure function from string to result: no
//! state survives a call, so it can be used from any number of threads at
//! once.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::core::eval, lexer::tokenize, parser},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines literal, unary and binary expression nodes.
/// - Attaches source offsets to AST nodes for error reporting.
/// - Prints trees in a fully parenthesized form.
pub mod ast;
/// Provides the error types for lexing, parsing and evaluation.
///
/// This module defines every error that can be raised while turning a string
/// into a number. Each user-facing error carries the offset at which it was
/// detected, and engine bugs are kept in a type of their own.
///
/// # Responsibilities
/// - Defines the error enum returned by every entry point.
/// - Attaches positions and readable messages to each failure.
/// - Separates input errors from broken internal invariants.
pub mod error;
/// Implements the three phases of evaluation.
///
/// This module ties together lexing, parsing and evaluation. Each phase is
/// usable on its own, and [`evaluate`] composes them.
///
/// # Responsibilities
/// - Turns source text into tokens, tokens into a tree, and a tree into a
///   number.
/// - Propagates the first error of any phase.
pub mod interpreter;
/// Caller-side policy around the engine.
///
/// The engine itself accepts any string. This module holds what a calling
/// layer adds on top: an input length limit, a uniform response envelope, and
/// a health check.
///
/// # Responsibilities
/// - Rejects overlong expressions before they reach the engine.
/// - Maps results and errors to a serializable envelope.
pub mod service;

/// Evaluates an arithmetic expression.
///
/// The source is tokenized, parsed into a tree and evaluated; the first
/// failure of any phase is returned. Whitespace between tokens is ignored.
///
/// # Errors
/// Returns an [`EvalError`] describing the first problem found: an unknown
/// character, a misplaced token, a missing operand or parenthesis, empty
/// input, or a division by zero.
///
/// # Examples
/// ```
/// use arithmetic_engine::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(evaluate("--5"), Ok(5.0));
///
/// assert_eq!(evaluate("10 / 0"), Err(EvalError::DivisionByZero { position: 3 }));
/// assert_eq!(evaluate(""), Err(EvalError::EmptyExpression));
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    let expr = parse(source)?;
    let value = eval(&expr)?;
    tracing::debug!(value, "evaluated expression");

    Ok(value)
}

/// Parses an arithmetic expression into a tree without evaluating it.
///
/// The whole source is tokenized before parsing starts, so an unknown
/// character is reported even if a syntax error precedes it.
///
/// # Errors
/// Returns the lexing or parsing error of [`evaluate`]. Division by zero is
/// only detected during evaluation.
///
/// # Examples
/// ```
/// use arithmetic_engine::parse;
///
/// let ast = parse("1 - 2 - 3").unwrap();
/// assert_eq!(ast.to_string(), "((1 - 2) - 3)");
///
/// assert!(parse("1 / 0").is_ok());
/// assert!(parse("2 (3)").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(source).collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(count = tokens.len(), "tokenized expression");

    let expr = parser::core::parse(&tokens)?;
    tracing::trace!(depth = expr.depth(), "parsed expression");

    Ok(expr)
}
