/// The evaluator module computes the numeric value of a finished AST.
///
/// The evaluator walks the tree recursively: 1-child nodes pass through to
/// their child, 3-child nodes apply their operator to the values of their
/// operands. Division is real-valued.
///
/// # Responsibilities
/// - Evaluates AST nodes to `f64` values.
/// - Enforces the node-shape invariants at every step.
/// - Rejects variable leaves, which carry no value in this engine.
pub mod evaluator;
/// The inflator module nests a flat token stream along its parentheses.
///
/// Inflation replaces every matched `(...)` run with a nested group so that
/// the reducer never has to look at parenthesis tokens. It is also where
/// nesting depth is bounded, since every later stage recurses once per
/// nesting level.
///
/// # Responsibilities
/// - Converts a token sequence into the nested fragment structure.
/// - Rejects unmatched `(` and `)`.
/// - Enforces the configurable maximum nesting depth.
pub mod inflator;
/// The lexer module tokenizes an expression string.
///
/// The lexer reads the raw input and produces tokens for integer literals,
/// identifiers, the four arithmetic operators, and parentheses. Whitespace
/// (space, tab, newline) is the only ignorable separator. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Preserves the raw lexeme of number and identifier tokens.
/// - Reports the first unrecognized character as a lexical error.
pub mod lexer;
/// The reducer module builds the abstract syntax tree.
///
/// The reducer consumes the nested fragment structure produced by the
/// inflator and folds it, left to right, into a typed AST under the
/// two-level precedence grammar (additive over multiplicative). Every
/// parenthesized group is reduced to its own additive root and spliced in as
/// an atom.
///
/// # Responsibilities
/// - Implements the grammar and left-associativity within each level.
/// - Validates operand/operator alternation, reporting precise errors.
/// - Rejects input left over after the root expression is complete.
pub mod reducer;
