#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing.
///
/// Lexical errors are fatal: the lexer aborts on the first rejected
/// character and returns no partial token list.
pub enum LexicalError {
    /// The input contained a character outside the expression grammar.
    InvalidChar {
        /// The rejected slice of the input, usually a single character.
        lexeme: String,
    },
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChar { lexeme } => write!(f, "invalid char: {lexeme}"),
        }
    }
}

impl std::error::Error for LexicalError {}
