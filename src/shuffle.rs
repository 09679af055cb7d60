//! Randomized, equivalence-preserving rewriting.
//!
//! The shuffler walks the tree top-down and at every operator node:
//!
//! 1. with probability [`ShuffleConfig::operator_probability`] disguises the
//!    operator (`A ∧ B -> ¬(A ⇒ ¬B)`, `A ∨ B -> ¬A ⇒ B`, XOR/IMPLIES/IFF are
//!    rewritten into AND/OR);
//! 2. with probability [`ShuffleConfig::negation_probability`] pushes the
//!    node's negation one level down;
//! 3. applies one of four permutations chosen uniformly: swap the children,
//!    rotate through the left child, rotate through the right child, or swap
//!    a pair of grandchildren across the two subtrees;
//! 4. recurses into both children.
//!
//! Only the truth table is preserved; the shape is not. All randomness comes
//! from the caller's RNG and the draws per node happen in a fixed order, so a
//! seeded RNG reproduces the same output.

use std::collections::HashSet;

use log::trace;
use rand::Rng;

use crate::node::Node;
use crate::types::Op;

/// Probabilities used by [`Node::shuffle_with`].
#[derive(Debug, Clone)]
pub struct ShuffleConfig {
    /// Chance of disguising the operator at a node (default: 0.2)
    pub operator_probability: f64,
    /// Chance of pushing a node's negation down (default: 0.3)
    pub negation_probability: f64,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            operator_probability: 0.2,
            negation_probability: 0.3,
        }
    }
}

impl ShuffleConfig {
    pub fn with_operator_probability(mut self, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "Probability must be in 0..=1");
        self.operator_probability = p;
        self
    }

    pub fn with_negation_probability(mut self, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "Probability must be in 0..=1");
        self.negation_probability = p;
        self
    }
}

impl Node {
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.shuffle_with(rng, &ShuffleConfig::default())
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &ShuffleConfig) -> &mut Self {
        if self.is_literal() {
            return self;
        }

        if rng.random_bool(config.operator_probability) {
            self.obscure_operator();
        }
        if rng.random_bool(config.negation_probability) {
            self.simplify_negation_local();
        }
        let choice = rng.random_range(0..4);
        self.permute(choice, rng);

        if let Node::Operator { left, right, .. } = self {
            left.shuffle_with(rng, config);
            right.shuffle_with(rng, config);
        }
        self
    }

    /// Returns a shuffled copy, leaving `self` untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Node {
        let mut copy = self.clone();
        copy.shuffle(rng);
        copy
    }

    /// Up to `count` shuffled copies whose renderings differ from each other
    /// and from `self`, trying at most `max_attempts` shuffles.
    pub fn distinct_shuffles<R: Rng + ?Sized>(&self, rng: &mut R, count: usize, max_attempts: usize) -> Vec<Node> {
        let mut seen = HashSet::from([self.to_string()]);
        let mut variants = Vec::with_capacity(count);
        for _ in 0..max_attempts {
            if variants.len() == count {
                break;
            }
            let variant = self.shuffled(rng);
            if seen.insert(variant.to_string()) {
                variants.push(variant);
            }
        }
        variants
    }

    fn obscure_operator(&mut self) {
        match self.op() {
            None => {}
            Some(Op::Xor | Op::Implies | Op::Iff) => {
                trace!("shuffle: eliminating {}", self);
                self.simplify_local();
            }
            Some(Op::And) => {
                // A ∧ B  =  ¬(A ⇒ ¬B)
                if let Node::Operator {
                    op, right, negated, ..
                } = self
                {
                    *op = Op::Implies;
                    *negated = !*negated;
                    right.negate();
                }
            }
            Some(Op::Or) => {
                // A ∨ B  =  ¬A ⇒ B
                if let Node::Operator { op, left, .. } = self {
                    *op = Op::Implies;
                    left.negate();
                }
            }
        }
    }

    fn permute<R: Rng + ?Sized>(&mut self, choice: u32, rng: &mut R) {
        let Node::Operator { op, left, right, .. } = self else {
            return;
        };
        let op = *op;
        if !op.is_commutative() {
            return;
        }

        match choice {
            0 => {
                trace!("shuffle: swap children of {}", op);
                std::mem::swap(left, right);
            }
            // (x op y) op r  ->  (r op y) op x  or  (x op r) op y
            1 if op.is_associative() && left.is_plain(op) => {
                if let Node::Operator { left: x, right: y, .. } = &mut **left {
                    let target = if rng.random_bool(0.5) { x } else { y };
                    std::mem::swap(target, right);
                }
            }
            // l op (x op y)  ->  x op (l op y)  or  y op (x op l)
            2 if op.is_associative() && right.is_plain(op) => {
                if let Node::Operator { left: x, right: y, .. } = &mut **right {
                    let target = if rng.random_bool(0.5) { x } else { y };
                    std::mem::swap(target, left);
                }
            }
            3 if op.is_associative() && left.is_plain(op) && right.is_plain(op) => {
                if let (
                    Node::Operator {
                        left: ll, right: lr, ..
                    },
                    Node::Operator {
                        left: rl, right: rr, ..
                    },
                ) = (&mut **left, &mut **right)
                {
                    let a = if rng.random_bool(0.5) { ll } else { lr };
                    let b = if rng.random_bool(0.5) { rl } else { rr };
                    std::mem::swap(a, b);
                }
            }
            _ => {}
        }
    }
}
