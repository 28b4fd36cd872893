use std::fmt;

use crate::engine::lexer::Token;

/// A single child slot of an expression node.
///
/// Children of an [`Expr`] are either nested expression nodes or raw tokens.
/// A finished tree only holds `Number`/`Var` tokens in leaf position and
/// operator tokens in the middle slot of a 3-child node, but the type keeps
/// other placements representable so the evaluator can report a malformed
/// tree instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A nested expression node.
    SubExpr(Expr),
    /// A terminal token: an operand leaf or the operator of a 3-child node.
    Token(Token),
}

/// An abstract syntax tree node under the two-level precedence grammar.
///
/// Valid nodes carry either one child (a pass-through to the next tighter
/// precedence level or a terminal) or three children
/// `[left, operator, right]`, where the operator's precedence class matches
/// the node's: additive nodes take `+`/`-`, multiplicative nodes take
/// `*`/`/`. No other arity is valid. Parenthesis tokens never appear in a
/// finished tree; a parenthesized group is spliced in as a fully reduced
/// subtree.
///
/// Trees are immutable after construction; the evaluator only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `Additive := Multiplicative (('+' | '-') Multiplicative)*`
    Additive {
        /// One pass-through child or `[left, operator, right]`.
        children: Vec<Element>,
    },
    /// `Multiplicative := Atom (('*' | '/') Atom)*`
    Multiplicative {
        /// One pass-through child or `[left, operator, right]`.
        children: Vec<Element>,
    },
}

impl Expr {
    /// Returns the children list of this node regardless of variant.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Additive { children } | Self::Multiplicative { children } => children,
        }
    }

    /// Returns the display label of this node's variant.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Additive { .. } => "AdditiveExpression",
            Self::Multiplicative { .. } => "MultiplicativeExpression",
        }
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.label(), indent = depth * 2)?;
        for child in self.children() {
            match child {
                Element::SubExpr(node) => node.fmt_tree(f, depth + 1)?,
                Element::Token(token) => {
                    writeln!(f, "{:indent$}{token}", "", indent = (depth + 1) * 2)?;
                },
            }
        }
        Ok(())
    }
}

/// Renders the tree with one label per line, children indented two spaces
/// under their parent. Leaves print their lexeme, inner nodes their variant
/// name.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
