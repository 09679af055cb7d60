//! Pretty-printing of expressions.
//!
//! Parentheses are dropped around a child that continues its parent's
//! associative operator (`A ∧ B ∧ C`), and around the root. Every other
//! operator child is parenthesized, so the output never depends on operator
//! precedence and the Unicode and ASCII forms parse back to an equivalent tree.

use std::fmt;

use crate::node::Node;
use crate::types::Op;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Notation {
    /// `¬A ∧ (B ⇒ C)`
    #[default]
    Unicode,
    /// `NOT A AND (B => C)`
    Ascii,
    /// `\neg A \land (B \Rightarrow C)`
    Latex,
}

impl Notation {
    fn not(self) -> &'static str {
        match self {
            Notation::Unicode => "¬",
            Notation::Ascii => "NOT ",
            Notation::Latex => "\\neg ",
        }
    }

    fn op(self, op: Op) -> &'static str {
        match (self, op) {
            (Notation::Unicode, Op::And) => "∧",
            (Notation::Unicode, Op::Or) => "∨",
            (Notation::Unicode, Op::Xor) => "⊕",
            (Notation::Unicode, Op::Implies) => "⇒",
            (Notation::Unicode, Op::Iff) => "⇔",
            (Notation::Ascii, Op::And) => "AND",
            (Notation::Ascii, Op::Or) => "OR",
            (Notation::Ascii, Op::Xor) => "XOR",
            (Notation::Ascii, Op::Implies) => "=>",
            (Notation::Ascii, Op::Iff) => "<=>",
            (Notation::Latex, Op::And) => "\\land",
            (Notation::Latex, Op::Or) => "\\lor",
            (Notation::Latex, Op::Xor) => "\\oplus",
            (Notation::Latex, Op::Implies) => "\\Rightarrow",
            (Notation::Latex, Op::Iff) => "\\Leftrightarrow",
        }
    }
}

/// A node paired with a notation, see [`Node::display`].
pub struct Rendered<'a> {
    node: &'a Node,
    notation: Notation,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.node, self.notation, None)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, notation: Notation, parent: Option<Op>) -> fmt::Result {
    match node {
        Node::Literal { name, negated } => {
            if *negated {
                write!(f, "{}", notation.not())?;
            }
            write!(f, "{}", name)
        }
        Node::Operator {
            op,
            left,
            right,
            negated,
        } => {
            let bare = !*negated && (parent.is_none() || parent == Some(*op) && op.is_associative());
            if *negated {
                write!(f, "{}", notation.not())?;
            }
            if !bare {
                write!(f, "(")?;
            }
            write_node(f, left, notation, Some(*op))?;
            write!(f, " {} ", notation.op(*op))?;
            write_node(f, right, notation, Some(*op))?;
            if !bare {
                write!(f, ")")?;
            }
            Ok(())
        }
    }
}

impl Node {
    /// Lazily renders the tree in the given notation.
    pub fn display(&self, notation: Notation) -> Rendered<'_> {
        Rendered { node: self, notation }
    }

    pub fn render(&self, notation: Notation) -> String {
        self.display(notation).to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, Notation::Unicode, None)
    }
}
