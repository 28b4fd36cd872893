use logos::Logos;

use crate::error::LexicalError;

/// Represents a lexical token in an arithmetic expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Number and identifier tokens carry their raw lexeme; for operators and
/// parentheses the variant itself is the value. Tokens are immutable once
/// emitted.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\n]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. No sign, decimal point or
    /// exponent: a leading `-` is always an operator token.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens, such as `x` or `rate2`. Digits may appear after
    /// the leading letter.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Var(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns `true` for `+` and `-`.
    #[must_use]
    pub const fn is_additive_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative_operator(&self) -> bool {
        matches!(self, Self::Star | Self::Slash)
    }

    /// Returns `true` for any of the four operator tokens.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.is_additive_operator() || self.is_multiplicative_operator()
    }
}

/// Writes the token's lexeme back out: the raw text for numbers and
/// identifiers, the punctuation character itself otherwise. Re-tokenizing
/// the rendered lexeme yields a token of the same kind.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Var(text) => write!(f, "{text}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Splits an expression string into tokens.
///
/// Accepted input: integer literals (`[0-9]+`), identifiers
/// (`[A-Za-z][A-Za-z0-9]*`), the operators `+ - * /`, parentheses, and
/// whitespace (space, tab, newline) as the only ignorable separator.
///
/// A digit run immediately followed by a letter splits into a number token
/// and an identifier token; the lexer neither drops nor rejects the letter,
/// and the reducer later rejects the juxtaposition.
///
/// # Parameters
/// - `input`: The expression text.
///
/// # Returns
/// The ordered token sequence.
///
/// # Errors
/// Returns `LexicalError::InvalidChar` on the first character outside the
/// grammar. No partial token list is returned.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexicalError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(LexicalError::InvalidChar { lexeme: lexer.slice().to_string(), });
            },
        }
    }

    Ok(tokens)
}
