//! # redex
//!
//! redex is a small arithmetic-expression engine written in Rust. It turns a
//! character string into tokens, nests the tokens along their parenthesis
//! structure, reduces the nested structure into a typed AST under a
//! two-level operator-precedence grammar (additive over multiplicative), and
//! evaluates the AST to an `f64` with real-valued division.
//!
//! Every stage is a pure, stateless function over immutable input; the first
//! error anywhere aborts the whole call with a typed, message-bearing
//! failure.

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
    engine::{evaluator, inflator, lexer, lexer::Token, reducer},
    error::{ExprError, LexicalError},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` and `Element` types that represent an
/// expression as a tree under the two-level precedence grammar. The AST is
/// built by the reducer, rendered by the tree printer, and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the additive and multiplicative node variants and their
///   children representation.
/// - States the 1-or-3-children node invariant.
/// - Renders trees as indented text for display.
pub mod ast;
/// Orchestrates the stages of the expression pipeline.
///
/// This module ties together lexing, inflation, reduction, and evaluation.
/// Each stage consumes the previous stage's output and owns its error type;
/// no stage retains state across calls.
///
/// # Responsibilities
/// - Coordinates the four core components: lexer, inflator, reducer, and
///   evaluator.
/// - Keeps every stage independently callable for callers that want
///   intermediate results.
pub mod engine;
/// Provides unified error types for every pipeline stage.
///
/// This module defines one error type per failure class (lexical,
/// structural, syntax, evaluation) plus a wrapper consumed uniformly by the
/// composed entry points. Messages follow a stable vocabulary: lexical
/// failures mention `invalid char`; the rest carry one of `expect`, `after`
/// or `unexpected`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes with human-readable messages.
/// - Keeps the message substrings callers rely on stable.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Splits an expression string into tokens.
///
/// This is the first pipeline stage, exposed on its own for callers that
/// only need lexical analysis.
///
/// # Errors
/// Returns a [`LexicalError`] on the first unrecognized character.
///
/// # Examples
/// ```
/// use redex::{engine::lexer::Token, tokenize};
///
/// let tokens = tokenize("1611 + 32").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("1611".to_string()),
///                 Token::Plus,
///                 Token::Number("32".to_string())]);
///
/// assert!(tokenize("1 + $").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexicalError> {
    lexer::tokenize(text)
}

/// Builds the AST of an expression without evaluating it.
///
/// Composes tokenize, inflate, and reduce. Exposed so a caller can render or
/// inspect the tree before (or instead of) computing its value; this is also
/// the path that accepts identifiers, which build fine but never evaluate.
///
/// # Errors
/// Returns the first error any stage raises, wrapped in [`ExprError`].
///
/// # Examples
/// ```
/// use redex::build_ast;
///
/// let ast = build_ast("11 + 22 * 33").unwrap();
/// assert_eq!(ast.children().len(), 3);
///
/// assert!(build_ast("1 +").is_err());
/// ```
pub fn build_ast(text: &str) -> Result<Expr, ExprError> {
    let tokens = lexer::tokenize(text)?;
    let fragments = inflator::inflate(&tokens)?;
    Ok(reducer::reduce(&fragments)?)
}

/// Evaluates an expression string to its numeric value.
///
/// Composes the whole pipeline: tokenize, inflate, reduce, evaluate.
/// Division is real-valued.
///
/// # Errors
/// Returns the first error any stage raises, wrapped in [`ExprError`].
///
/// # Examples
/// ```
/// use redex::evaluate;
///
/// assert_eq!(evaluate("9 - 8 * 11 /2 + 2").unwrap(), -33.0);
/// assert_eq!(evaluate("22").unwrap(), 22.0);
///
/// // Identifiers are recognized lexically but carry no value.
/// assert!(evaluate("a + 1").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<f64, ExprError> {
    let ast = build_ast(text)?;
    Ok(evaluator::evaluate_ast(&ast)?)
}
