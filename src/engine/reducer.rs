use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::{Element, Expr},
    engine::{inflator::Fragment, lexer::Token},
    error::SyntaxError,
};

/// Result type used by the reducer.
pub type ReduceResult<T> = Result<T, SyntaxError>;

/// Cursor over the immutable fragment slice being reduced.
type Fragments<'a> = Peekable<Iter<'a, Fragment>>;

/// Reduces a nested token structure to its root `Additive` node.
///
/// This is the entry point of the grammar engine. It folds the fragments at
/// this nesting level, left to right, into a single additive expression and
/// then requires the input to be exhausted. Groups are reduced recursively
/// through the same entry point, so recursion depth equals nesting depth
/// (already bounded by the inflator).
///
/// Grammar (precedence low to high):
/// `Additive := Multiplicative (('+' | '-') Multiplicative)*`;
/// `Multiplicative := Atom (('*' | '/') Atom)*`;
/// `Atom := number | var | group`.
///
/// # Parameters
/// - `fragments`: One nesting level of the inflated token structure.
///
/// # Returns
/// The root [`Expr::Additive`] node.
///
/// # Errors
/// Returns a `SyntaxError` for a missing operand before or after an
/// operator, an empty group, or fragments left over once the root
/// expression is complete.
pub fn reduce(fragments: &[Fragment]) -> ReduceResult<Expr> {
    let mut cursor = fragments.iter().peekable();
    let root = reduce_additive(&mut cursor)?;

    if let Some(leftover) = cursor.next() {
        return Err(SyntaxError::TrailingInput { found: describe(leftover), });
    }

    Ok(root)
}

/// Folds additive expressions left to right.
///
/// The first multiplicative operand is wrapped in a 1-child `Additive`
/// pass-through node; each following `('+' | '-') Multiplicative` pair folds
/// the accumulated node into the left slot of a new 3-child node, which
/// makes left-associativity structural.
fn reduce_additive(cursor: &mut Fragments<'_>) -> ReduceResult<Expr> {
    let first = reduce_multiplicative(cursor)?;
    let mut node = Expr::Additive { children: vec![Element::SubExpr(first)], };

    while let Some(Fragment::Token(token)) = cursor.peek()
          && token.is_additive_operator()
    {
        let operator = (*token).clone();
        cursor.next();
        require_operand(cursor, &operator)?;
        let right = reduce_multiplicative(cursor)?;
        node = Expr::Additive { children: vec![Element::SubExpr(node),
                                               Element::Token(operator),
                                               Element::SubExpr(right)], };
    }

    Ok(node)
}

/// Folds multiplicative expressions left to right, one precedence level
/// below [`reduce_additive`].
fn reduce_multiplicative(cursor: &mut Fragments<'_>) -> ReduceResult<Expr> {
    let first = reduce_atom(cursor)?;
    let mut node = Expr::Multiplicative { children: vec![first] };

    while let Some(Fragment::Token(token)) = cursor.peek()
          && token.is_multiplicative_operator()
    {
        let operator = (*token).clone();
        cursor.next();
        require_operand(cursor, &operator)?;
        let right = reduce_atom(cursor)?;
        node = Expr::Multiplicative { children: vec![Element::SubExpr(node),
                                                     Element::Token(operator),
                                                     right], };
    }

    Ok(node)
}

/// Reduces one atom: a number or identifier leaf, or a parenthesized group.
///
/// A group stands for a fully parenthesized sub-expression: it is reduced in
/// isolation to its own additive root and spliced in as a single element.
/// An empty group has no valid atom inside and is rejected.
fn reduce_atom(cursor: &mut Fragments<'_>) -> ReduceResult<Element> {
    match cursor.next() {
        Some(Fragment::Token(token @ (Token::Number(_) | Token::Var(_)))) => {
            Ok(Element::Token(token.clone()))
        },

        Some(Fragment::Group(items)) => {
            if items.is_empty() {
                return Err(SyntaxError::EmptyGroup);
            }
            Ok(Element::SubExpr(reduce(items)?))
        },

        Some(Fragment::Token(token)) => {
            Err(SyntaxError::ExpectedOperand { found: Some(token.to_string()), })
        },

        None => Err(SyntaxError::ExpectedOperand { found: None }),
    }
}

/// Rejects an operator that is immediately followed by another operator or
/// by end of input, before the operand parse is attempted. This keeps the
/// "after" wording tied to the operator that is missing its right-hand side.
fn require_operand(cursor: &mut Fragments<'_>, operator: &Token) -> ReduceResult<()> {
    match cursor.peek() {
        None => Err(SyntaxError::MissingOperand { operator: operator.to_string(),
                                                  found:    None, }),

        Some(Fragment::Token(token)) if token.is_operator() => {
            Err(SyntaxError::MissingOperand { operator: operator.to_string(),
                                              found:    Some(token.to_string()), })
        },

        _ => Ok(()),
    }
}

fn describe(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Token(token) => format!("\"{token}\""),
        Fragment::Group(_) => "\"(...)\"".to_string(),
    }
}
