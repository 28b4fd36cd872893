/// Evaluation errors.
///
/// Contains the error type raised while walking a finished AST: unsupported
/// leaves (variables carry no value), operator tokens of the wrong precedence
/// class, and nodes whose shape violates the 1-or-3-children invariant.
pub mod eval_error;
/// Lexical errors.
///
/// Contains the error type raised while splitting the input string into
/// tokens. The only failure mode is a character outside the expression
/// grammar.
pub mod lexical_error;
/// Structural errors.
///
/// Contains the error type raised while nesting the token stream along its
/// parenthesis structure: unmatched parentheses and nesting deeper than the
/// configured limit.
pub mod structural_error;
/// Syntax errors.
///
/// Contains the error type raised while reducing the nested token structure
/// into an AST: missing operands, tokens left over after a complete
/// expression, and empty groups.
pub mod syntax_error;

pub use eval_error::EvalError;
pub use lexical_error::LexicalError;
pub use structural_error::StructuralError;
pub use syntax_error::SyntaxError;

#[derive(Debug)]
/// Any failure the expression pipeline can produce.
///
/// The composed entry points ([`build_ast`](crate::build_ast) and
/// [`evaluate`](crate::evaluate)) run several stages, each with its own error
/// type; this enum lets callers consume all of them uniformly. The first
/// error any stage raises aborts the whole call and propagates unchanged,
/// there is no partial result.
pub enum ExprError {
    /// The lexer rejected a character.
    Lexical(LexicalError),
    /// The inflator rejected the parenthesis structure.
    Structural(StructuralError),
    /// The reducer rejected the token arrangement.
    Syntax(SyntaxError),
    /// The evaluator rejected the AST.
    Eval(EvalError),
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Structural(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExprError {}

impl From<LexicalError> for ExprError {
    fn from(e: LexicalError) -> Self {
        Self::Lexical(e)
    }
}

impl From<StructuralError> for ExprError {
    fn from(e: StructuralError) -> Self {
        Self::Structural(e)
    }
}

impl From<SyntaxError> for ExprError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<EvalError> for ExprError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
