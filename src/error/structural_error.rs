#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while inflating the token stream.
///
/// Every message carries the `unexpected` vocabulary so that parenthesis
/// mismatches surface to callers through the same taxonomy as reduction
/// errors.
pub enum StructuralError {
    /// A `)` appeared with no open group to close.
    UnmatchedCloseParen,
    /// The input ended with one or more groups still open.
    UnmatchedOpenParen {
        /// How many `(` were left unclosed.
        count: usize,
    },
    /// Parentheses nested deeper than the configured limit.
    NestingTooDeep {
        /// The limit that was exceeded.
        limit: usize,
    },
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedCloseParen => {
                write!(f, "invalid token list: unexpected \")\" with no open group")
            },

            Self::UnmatchedOpenParen { count } => write!(f,
                                                         "invalid token list: unexpected end of input with {count} unclosed \"(\""),

            Self::NestingTooDeep { limit } => write!(f,
                                                     "invalid token list: unexpected nesting deeper than {limit} parentheses"),
        }
    }
}

impl std::error::Error for StructuralError {}
