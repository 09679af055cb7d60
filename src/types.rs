//! Operator kinds and target normal forms.
//!
//! The syntax tree has a single operator variant parametrized by [`Op`];
//! negation is a flag on every node rather than an operator of its own.

use std::fmt;

/// A binary connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Op {
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl Op {
    /// All operators, in declaration order.
    pub const ALL: [Op; 5] = [Op::And, Op::Or, Op::Xor, Op::Implies, Op::Iff];

    /// Applies the connective to two truth values.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Op::And => a && b,
            Op::Or => a || b,
            Op::Xor => a ^ b,
            Op::Implies => !a || b,
            Op::Iff => a == b,
        }
    }

    /// Operators whose operands may be regrouped and reordered freely.
    ///
    /// Only these take part in rotations and grandchild swaps.
    pub fn is_associative(self) -> bool {
        matches!(self, Op::And | Op::Or | Op::Xor)
    }

    /// Operators whose two operands may be swapped.
    ///
    /// IFF is included: `A ⇔ B` and `B ⇔ A` agree on every row, so the shuffler
    /// may swap its children. It is not associative, so it is never regrouped.
    /// IMPLIES is the only connective left in place.
    pub fn is_commutative(self) -> bool {
        !matches!(self, Op::Implies)
    }

    /// Returns the De Morgan dual of AND/OR.
    ///
    /// # Panics
    ///
    /// Panics for XOR, IMPLIES and IFF, which have to be eliminated first.
    pub fn dual(self) -> Self {
        match self {
            Op::And => Op::Or,
            Op::Or => Op::And,
            op => panic!("Operator {:?} has no De Morgan dual", op),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Op::And => "∧",
            Op::Or => "∨",
            Op::Xor => "⊕",
            Op::Implies => "⇒",
            Op::Iff => "⇔",
        };
        write!(f, "{}", s)
    }
}

/// Target shape for [`Node::to_normal_form`][crate::node::Node::to_normal_form].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NormalForm {
    /// Conjunction of clauses (AND of ORs).
    Cnf,
    /// Disjunction of terms (OR of ANDs).
    Dnf,
}

impl NormalForm {
    /// Operator joining clauses (CNF) or terms (DNF).
    pub fn outer(self) -> Op {
        match self {
            NormalForm::Cnf => Op::And,
            NormalForm::Dnf => Op::Or,
        }
    }

    /// Operator joining the literals inside one clause or term.
    pub fn inner(self) -> Op {
        self.outer().dual()
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalForm::Cnf => write!(f, "CNF"),
            NormalForm::Dnf => write!(f, "DNF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_op_truth_tables() {
        let rows = [(false, false), (true, false), (false, true), (true, true)];
        let table = |op: Op| rows.map(|(a, b)| op.apply(a, b));

        assert_eq!(table(Op::And), [false, false, false, true]);
        assert_eq!(table(Op::Or), [false, true, true, true]);
        assert_eq!(table(Op::Xor), [false, true, true, false]);
        assert_eq!(table(Op::Implies), [true, false, true, true]);
        assert_eq!(table(Op::Iff), [true, false, false, true]);
    }

    #[test]
    fn test_op_classes() {
        assert!(Op::And.is_associative());
        assert!(Op::Or.is_associative());
        assert!(Op::Xor.is_associative());
        assert!(!Op::Implies.is_associative());
        assert!(!Op::Iff.is_associative());

        assert!(Op::Iff.is_commutative());
        assert!(!Op::Implies.is_commutative());
    }

    #[test]
    fn test_dual() {
        assert_eq!(Op::And.dual(), Op::Or);
        assert_eq!(Op::Or.dual(), Op::And);
        assert_eq!(NormalForm::Cnf.inner(), Op::Or);
        assert_eq!(NormalForm::Dnf.inner(), Op::And);
    }

    #[test]
    #[should_panic(expected = "has no De Morgan dual")]
    fn test_dual_of_implies_panics() {
        Op::Implies.dual();
    }
}
