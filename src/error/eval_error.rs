#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a finished AST.
///
/// A well-formed tree built by the reducer never triggers the shape
/// variants; they guard against hand-built trees that violate the node
/// invariants.
pub enum EvalError {
    /// Tried to evaluate a variable leaf. Variables are recognized lexically
    /// but never bound to a value in this engine.
    UnboundVariable {
        /// The variable's name.
        name: String,
    },
    /// A 3-child node carried an operator outside its precedence class.
    OperatorClassMismatch {
        /// The node's variant label.
        node:     String,
        /// The offending operator token.
        operator: String,
    },
    /// A number leaf whose lexeme does not parse as a 64-bit float.
    InvalidNumber {
        /// The raw lexeme.
        text: String,
    },
    /// A node whose children list violates the 1-or-3 invariant, or a token
    /// that cannot stand where it was found.
    MalformedNode {
        /// What exactly was wrong with the node.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f,
                                                     "cannot evaluate variable \"{name}\": variables carry no value"),

            Self::OperatorClassMismatch { node, operator } => {
                write!(f, "operator \"{operator}\" is not valid in a {node} node")
            },

            Self::InvalidNumber { text } => write!(f, "invalid number literal \"{text}\""),

            Self::MalformedNode { details } => write!(f, "malformed expression node: {details}"),
        }
    }
}

impl std::error::Error for EvalError {}
