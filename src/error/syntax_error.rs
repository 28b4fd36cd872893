#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while reducing tokens into an AST.
///
/// The `Display` wording is part of the crate's contract: callers match on
/// the substrings `expect`, `after` and `unexpected`, not on the full
/// sentence.
pub enum SyntaxError {
    /// An operand was required but something else led the input.
    ExpectedOperand {
        /// The token that was found instead, or `None` at end of input.
        found: Option<String>,
    },
    /// An operator was not followed by an operand.
    MissingOperand {
        /// The operator missing its right-hand side.
        operator: String,
        /// The operator token that followed, or `None` at end of input.
        found:    Option<String>,
    },
    /// A complete expression was followed by more input.
    TrailingInput {
        /// A rendering of the leftover token or group.
        found: String,
    },
    /// A `()` pair with nothing inside.
    EmptyGroup,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedOperand { found: Some(t) } => {
                write!(f, "expect number or expression but got \"{t}\"")
            },
            Self::ExpectedOperand { found: None } => {
                write!(f, "expect number or expression but got end of input")
            },

            Self::MissingOperand { operator,
                                   found: Some(t), } => write!(f,
                                                               "expect number or expression after \"{operator}\" but got \"{t}\""),
            Self::MissingOperand { operator, found: None } => write!(f,
                                                                     "expect number or expression after \"{operator}\" but got end of input"),

            Self::TrailingInput { found } => {
                write!(f, "unexpected {found} after a complete expression")
            },

            Self::EmptyGroup => write!(f, "unexpected empty group \"()\""),
        }
    }
}

impl std::error::Error for SyntaxError {}
