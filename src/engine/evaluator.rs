use crate::{
    ast::{Element, Expr},
    engine::lexer::Token,
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a finished AST to its numeric value.
///
/// Pure recursive walk: a 1-child node evaluates to its child's value; a
/// 3-child node evaluates `left OP right`, where the operator token must
/// belong to the node's precedence class (`+`/`-` for additive nodes,
/// `*`/`/` for multiplicative nodes). Division is real-valued, so fractional
/// remainders propagate forward.
///
/// # Parameters
/// - `node`: The root of the tree to evaluate.
///
/// # Returns
/// The expression's value.
///
/// # Errors
/// Returns an `EvalError` if the tree violates the node-shape invariants,
/// carries an operator of the wrong precedence class, or holds a variable
/// leaf. Variables have no bound value in this engine; evaluating one is
/// always an error, never a silent zero.
pub fn evaluate_ast(node: &Expr) -> EvalResult<f64> {
    match node.children() {
        [only] => evaluate_element(only),

        [left, operator, right] => {
            let Element::Token(operator) = operator else {
                return Err(EvalError::MalformedNode { details:
                               "operator slot holds a nested expression".to_string(), });
            };
            let lhs = evaluate_element(left)?;
            let rhs = evaluate_element(right)?;
            apply(node, operator, lhs, rhs)
        },

        children => {
            Err(EvalError::MalformedNode { details: format!("node has {} children, expected 1 or 3",
                                                            children.len()), })
        },
    }
}

fn evaluate_element(element: &Element) -> EvalResult<f64> {
    match element {
        Element::SubExpr(node) => evaluate_ast(node),

        Element::Token(Token::Number(text)) => {
            text.parse()
                .map_err(|_| EvalError::InvalidNumber { text: text.clone() })
        },

        Element::Token(Token::Var(name)) => {
            Err(EvalError::UnboundVariable { name: name.clone() })
        },

        Element::Token(token) => {
            Err(EvalError::MalformedNode { details: format!("\"{token}\" cannot stand as an operand"), })
        },
    }
}

fn apply(node: &Expr, operator: &Token, lhs: f64, rhs: f64) -> EvalResult<f64> {
    match (node, operator) {
        (Expr::Additive { .. }, Token::Plus) => Ok(lhs + rhs),
        (Expr::Additive { .. }, Token::Minus) => Ok(lhs - rhs),
        (Expr::Multiplicative { .. }, Token::Star) => Ok(lhs * rhs),
        (Expr::Multiplicative { .. }, Token::Slash) => Ok(lhs / rhs),

        _ => Err(EvalError::OperatorClassMismatch { node:     node.label().to_string(),
                                                    operator: operator.to_string(), }),
    }
}
