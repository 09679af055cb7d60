//! The expression syntax tree.
//!
//! A [`Node`] is either a variable reference ([`Node::Literal`]) or a binary
//! connective ([`Node::Operator`]). Both variants carry a `negated` flag which
//! complements the node's value *after* its own semantics are computed, so
//! there is no separate NOT node: negating a subtree is a flag flip.
//!
//! Trees own their children through `Box`. Rewrites (`negate`, `simplify*`,
//! `shuffle`) take `&mut self` and return `&mut Self` for chaining, which means
//! a subtree can never be mutated while another reference to it is alive.
//! Use `clone()` to get an independent copy before rewriting.

use std::collections::BTreeSet;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::types::Op;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Literal {
        name: String,
        negated: bool,
    },
    Operator {
        op: Op,
        left: Box<Node>,
        right: Box<Node>,
        negated: bool,
    },
}

// Constructors
impl Node {
    pub fn var(name: impl Into<String>) -> Self {
        Node::Literal {
            name: name.into(),
            negated: false,
        }
    }

    pub fn not_var(name: impl Into<String>) -> Self {
        Node::Literal {
            name: name.into(),
            negated: true,
        }
    }

    pub fn binary(op: Op, left: Node, right: Node) -> Self {
        Node::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
            negated: false,
        }
    }

    pub fn and(left: Node, right: Node) -> Self {
        Self::binary(Op::And, left, right)
    }

    pub fn or(left: Node, right: Node) -> Self {
        Self::binary(Op::Or, left, right)
    }

    pub fn xor(left: Node, right: Node) -> Self {
        Self::binary(Op::Xor, left, right)
    }

    pub fn implies(left: Node, right: Node) -> Self {
        Self::binary(Op::Implies, left, right)
    }

    pub fn iff(left: Node, right: Node) -> Self {
        Self::binary(Op::Iff, left, right)
    }

    /// Left-folds `nodes` with `op`: `((n0 op n1) op n2) ...`.
    ///
    /// Returns `None` for an empty iterator.
    pub fn fold(op: Op, nodes: impl IntoIterator<Item = Node>) -> Option<Self> {
        nodes.into_iter().reduce(|acc, node| Self::binary(op, acc, node))
    }
}

// Getters
impl Node {
    pub fn is_negated(&self) -> bool {
        match self {
            Node::Literal { negated, .. } | Node::Operator { negated, .. } => *negated,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal { .. })
    }

    /// Returns the operator of an operator node, `None` for literals.
    pub fn op(&self) -> Option<Op> {
        match self {
            Node::Literal { .. } => None,
            Node::Operator { op, .. } => Some(*op),
        }
    }

    /// Returns the children of an operator node, `None` for literals.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Literal { .. } => None,
            Node::Operator { left, right, .. } => Some((left, right)),
        }
    }

    /// True if this is an unnegated operator node with the given operator.
    pub(crate) fn is_plain(&self, expected: Op) -> bool {
        matches!(self, Node::Operator { op, negated: false, .. } if *op == expected)
    }

    /// Sorted, deduplicated variable names occurring in the tree.
    pub fn variable_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.collect_names(&mut names);
        names.into_iter().map(str::to_owned).collect()
    }

    pub(crate) fn collect_names<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Node::Literal { name, .. } => {
                names.insert(name.as_str());
            }
            Node::Operator { left, right, .. } => {
                left.collect_names(names);
                right.collect_names(names);
            }
        }
    }

    /// Number of literal occurrences.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Literal { .. } => 1,
            Node::Operator { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Node::Literal { .. } => 1,
            Node::Operator { left, right, .. } => 1 + left.size() + right.size(),
        }
    }

    /// Depth of the tree (0 for a literal).
    pub fn depth(&self) -> usize {
        match self {
            Node::Literal { .. } => 0,
            Node::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Visits every node, parents before children, left before right.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        if let Node::Operator { left, right, .. } = self {
            left.walk(f);
            right.walk(f);
        }
    }
}

// Mutation
impl Node {
    /// Complements the node in place.
    pub fn negate(&mut self) -> &mut Self {
        match self {
            Node::Literal { negated, .. } | Node::Operator { negated, .. } => *negated = !*negated,
        }
        self
    }
}

impl Not for Node {
    type Output = Node;

    fn not(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl BitAnd for Node {
    type Output = Node;

    fn bitand(self, rhs: Self) -> Self::Output {
        Node::and(self, rhs)
    }
}

impl BitOr for Node {
    type Output = Node;

    fn bitor(self, rhs: Self) -> Self::Output {
        Node::or(self, rhs)
    }
}

impl BitXor for Node {
    type Output = Node;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Node::xor(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn sample() -> Node {
        // (B ∧ ¬A) ⇒ (C ∨ A)
        Node::implies(Node::var("B") & Node::not_var("A"), Node::var("C") | Node::var("A"))
    }

    #[test]
    fn test_variable_names_sorted_dedup() {
        assert_eq!(sample().variable_names(), vec!["A", "B", "C"]);
        assert_eq!(Node::var("x").variable_names(), vec!["x"]);
    }

    #[test]
    fn test_metrics() {
        let n = sample();
        assert_eq!(n.leaf_count(), 4);
        assert_eq!(n.size(), 7);
        assert_eq!(n.depth(), 2);
        assert_eq!(Node::var("A").depth(), 0);
    }

    #[test]
    fn test_negate_is_flag_flip() {
        let mut n = Node::var("A") & Node::var("B");
        assert!(!n.is_negated());
        n.negate();
        assert!(n.is_negated());
        assert_eq!(n.op(), Some(Op::And));
        n.negate().negate();
        assert!(n.is_negated());
        assert_eq!(!!Node::var("A"), Node::var("A"));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.negate();
        if let Node::Operator { left, .. } = &mut copy {
            left.negate();
        }
        assert_ne!(copy, original);
        assert_eq!(original, sample());
    }

    #[test]
    fn test_fold_is_left_nested() {
        let folded = Node::fold(Op::Or, ["A", "B", "C"].map(Node::var)).unwrap();
        assert_eq!(folded, (Node::var("A") | Node::var("B")) | Node::var("C"));
        assert_eq!(Node::fold(Op::And, Vec::new()), None);
    }

    #[test]
    fn test_walk_preorder() {
        let mut names = Vec::new();
        sample().walk(&mut |n| {
            if let Node::Literal { name, .. } = n {
                names.push(name.clone());
            }
        });
        assert_eq!(names, vec!["B", "A", "C", "A"]);
    }
}
