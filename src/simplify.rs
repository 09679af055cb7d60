//! Operator elimination and negation pushdown.
//!
//! All rewrites work in place and keep the truth table of the tree:
//!
//! ```text
//! A ⊕ B  ->  (A ∧ ¬B) ∨ (¬A ∧ B)
//! A ⇒ B  ->  ¬A ∨ B
//! A ⇔ B  ->  (A ∧ B) ∨ (¬A ∧ ¬B)
//! ¬(A ∧ B)  ->  ¬A ∨ ¬B
//! ¬(A ∨ B)  ->  ¬A ∧ ¬B
//! ```

use crate::node::Node;
use crate::types::Op;

impl Node {
    /// Rewrites this node (not its children) into AND/OR form if its operator
    /// is XOR, IMPLIES or IFF. The node's own negation is kept.
    pub fn simplify_local(&mut self) -> &mut Self {
        if let Node::Operator { op, left, right, .. } = self {
            match *op {
                Op::And | Op::Or => {}
                Op::Xor => {
                    let (a, b) = ((**left).clone(), (**right).clone());
                    **left = Node::and(a.clone(), !b.clone());
                    **right = Node::and(!a, b);
                    *op = Op::Or;
                }
                Op::Implies => {
                    left.negate();
                    *op = Op::Or;
                }
                Op::Iff => {
                    let (a, b) = ((**left).clone(), (**right).clone());
                    **left = Node::and(a.clone(), b.clone());
                    **right = Node::and(!a, !b);
                    *op = Op::Or;
                }
            }
        }
        self
    }

    /// Eliminates XOR, IMPLIES and IFF everywhere in the tree.
    pub fn simplify(&mut self) -> &mut Self {
        self.simplify_local();
        if let Node::Operator { left, right, .. } = self {
            left.simplify();
            right.simplify();
        }
        self
    }

    /// Moves a negation on this operator node down to its children.
    pub fn simplify_negation_local(&mut self) -> &mut Self {
        if self.is_literal() || !self.is_negated() {
            return self;
        }
        self.simplify_local();
        if let Node::Operator {
            op,
            left,
            right,
            negated,
        } = self
        {
            *op = op.dual();
            left.negate();
            right.negate();
            *negated = false;
        }
        self
    }

    /// Pushes every negation down to the literals.
    ///
    /// Afterwards no operator node is negated. Unnegated XOR/IMPLIES/IFF nodes
    /// are left alone; combine with [`Node::simplify`] for a pure AND/OR tree.
    pub fn simplify_negation(&mut self) -> &mut Self {
        self.simplify_negation_local();
        if let Node::Operator { left, right, .. } = self {
            left.simplify_negation();
            right.simplify_negation();
        }
        self
    }

    /// Negation normal form: AND/OR only, negations on literals only.
    pub fn to_nnf(&self) -> Node {
        let mut nnf = self.clone();
        nnf.simplify().simplify_negation();
        nnf
    }
}
