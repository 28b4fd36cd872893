use crate::{engine::lexer::Token, error::StructuralError};

/// Default cap on parenthesis nesting depth.
///
/// Reduction and evaluation recurse once per nesting level, so the inflator
/// bounds the depth up front and reports adversarial input as an error
/// instead of risking stack exhaustion later in the pipeline.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// One element of the nested token structure produced by inflation.
///
/// Every `Group` corresponds to exactly one matched `(...)` pair of the
/// original token stream; the parenthesis tokens themselves are consumed.
/// The outermost fragment list has no corresponding parenthesis pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A token that sits directly at this nesting level.
    Token(Token),
    /// The contents of one matched `(...)` pair.
    Group(Vec<Fragment>),
}

/// Nests a flat token sequence along its parenthesis structure, using the
/// default depth limit of [`DEFAULT_MAX_DEPTH`].
///
/// # Errors
/// See [`inflate_with_limit`].
pub fn inflate(tokens: &[Token]) -> Result<Vec<Fragment>, StructuralError> {
    inflate_with_limit(tokens, DEFAULT_MAX_DEPTH)
}

/// Nests a flat token sequence along its parenthesis structure.
///
/// Maintains a stack of fragment lists, initialized with one empty top-level
/// list. `(` pushes a fresh list; `)` pops the top list and appends it as a
/// [`Fragment::Group`] to the new top; every other token is appended to the
/// top list. After all tokens, exactly the top-level list must remain.
///
/// # Parameters
/// - `tokens`: The flat token sequence.
/// - `max_depth`: Maximum allowed parenthesis nesting depth.
///
/// # Returns
/// The top-level fragment list.
///
/// # Errors
/// Returns a `StructuralError` for a `)` with no open group, for unclosed
/// `(` at end of input, or when nesting exceeds `max_depth`.
pub fn inflate_with_limit(tokens: &[Token],
                          max_depth: usize)
                          -> Result<Vec<Fragment>, StructuralError> {
    let mut stack: Vec<Vec<Fragment>> = vec![Vec::new()];

    for token in tokens {
        match token {
            Token::LParen => {
                // stack.len() counts the top level, so it equals the new depth.
                if stack.len() > max_depth {
                    return Err(StructuralError::NestingTooDeep { limit: max_depth });
                }
                stack.push(Vec::new());
            },

            Token::RParen => {
                if stack.len() == 1 {
                    return Err(StructuralError::UnmatchedCloseParen);
                }
                if let Some(group) = stack.pop()
                   && let Some(top) = stack.last_mut()
                {
                    top.push(Fragment::Group(group));
                }
            },

            other => {
                if let Some(top) = stack.last_mut() {
                    top.push(Fragment::Token(other.clone()));
                }
            },
        }
    }

    if stack.len() != 1 {
        return Err(StructuralError::UnmatchedOpenParen { count: stack.len() - 1, });
    }

    Ok(stack.pop().unwrap_or_default())
}
