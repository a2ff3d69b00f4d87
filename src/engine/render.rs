//! Infix reconstruction of the postfix program.
//!
//! Mirrors the evaluation recursion, building text instead of numbers.
//! The parenthesization rule, applied consistently:
//!
//! - operands render in evaluation order, second-popped first, so
//!   `10 3 −` reads `10−3`;
//! - a sub-expression is wrapped when its outermost operator binds
//!   strictly looser than the current operator;
//! - the right (first-popped) side is also wrapped on *equal* precedence
//!   under a non-commutative operator, so `10 3 2 − −` reads `10−(3−2)`.

use crate::ops::{LEAF_PRECEDENCE, Step};

use super::Engine;

/// Placeholder for an operand a malformed program never supplied.
const MISSING: &str = "?";

/// Rendered text of a sub-expression plus the precedence of its
/// outermost operator, for the parent's wrapping decision.
struct Fragment {
    text: String,
    precedence: u8,
}

impl Fragment {
    fn leaf(text: String) -> Self {
        Self {
            text,
            precedence: LEAF_PRECEDENCE,
        }
    }
}

impl Engine {
    /// Renders the program as comma-separated infix expressions followed
    /// by `=`. Multiple expressions appear when independent complete
    /// sub-expressions were pushed sequentially; they render oldest
    /// first. An empty program renders as the display placeholder `" "`.
    pub fn history(&self) -> String {
        if self.program.is_empty() {
            return " ".to_string();
        }
        let mut rendered = Vec::new();
        let mut rest: &[Step] = &self.program;
        while !rest.is_empty() {
            let (fragment, remainder) = self.render_expr(rest);
            rendered.push(fragment.text);
            rest = remainder;
        }
        rendered.reverse();
        format!("{} =", rendered.join(", "))
    }

    /// Tail-first recursive rendering, structurally identical to the
    /// evaluation reduction. Never fails: a missing operand renders as
    /// `?` instead of aborting.
    fn render_expr<'a>(&self, steps: &'a [Step]) -> (Fragment, &'a [Step]) {
        let Some((step, rest)) = steps.split_last() else {
            return (Fragment::leaf(MISSING.to_string()), steps);
        };
        match step {
            Step::Operand(_) | Step::Variable(_) | Step::Constant { .. } => {
                (Fragment::leaf(step.symbol()), rest)
            }
            Step::Unary { symbol, .. } => {
                let (inner, rest) = self.render_expr(rest);
                (Fragment::leaf(format!("{symbol}({})", inner.text)), rest)
            }
            Step::Binary {
                symbol,
                precedence,
                func,
            } => {
                let (rhs, rest) = self.render_expr(rest);
                let (lhs, rest) = self.render_expr(rest);
                let lhs_text = if lhs.precedence < *precedence {
                    format!("({})", lhs.text)
                } else {
                    lhs.text
                };
                let wrap_rhs = rhs.precedence < *precedence
                    || (rhs.precedence == *precedence && !func.commutative());
                let rhs_text = if wrap_rhs {
                    format!("({})", rhs.text)
                } else {
                    rhs.text
                };
                (
                    Fragment {
                        text: format!("{lhs_text}{symbol}{rhs_text}"),
                        precedence: *precedence,
                    },
                    rest,
                )
            }
        }
    }
}
