//! Random expression generation.
//!
//! [`generate`] builds a tree with exactly `total_leaves` literals drawn from
//! a pool of variable names. Chains of the same AND/OR operator avoid reusing
//! a variable, since `A ∧ ¬A` or `A ∨ A` inside a question tends to collapse
//! the whole expression into a constant or a trivially shorter one:
//!
//! - a node continuing its parent's AND/OR chain cannot use a name the chain
//!   has already consumed;
//! - if fewer than two names are left for the chain, the parent's operator is
//!   not chosen again, and while the pool is tight it is chosen less often.
//!
//! Different operators start fresh chains and may reuse any name. Under every
//! operator, a single-leaf right subtree reserves its name before the left
//! subtree is built, and a single-leaf left sibling avoids it.

use std::collections::BTreeSet;

use log::{debug, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::node::Node;
use crate::types::Op;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Operators to pick from (default: all five)
    pub operators: Vec<Op>,
    /// Chance of negating a generated literal (default: 0.2)
    pub negation_probability: f64,
    /// Weight of repeating the parent's AND/OR while names are scarce (default: 1)
    pub repeat_weight: u32,
    /// Weight of every other operator (default: 4)
    pub fresh_weight: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            operators: Op::ALL.to_vec(),
            negation_probability: 0.2,
            repeat_weight: 1,
            fresh_weight: 4,
        }
    }
}

impl GeneratorConfig {
    pub fn with_operators(mut self, operators: &[Op]) -> Self {
        self.operators = operators.to_vec();
        self
    }

    pub fn with_negation_probability(mut self, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "Probability must be in 0..=1");
        self.negation_probability = p;
        self
    }
}

/// Generates a random expression with the default configuration.
///
/// # Panics
///
/// Panics if `total_leaves == 0` or `allowed_variables` is empty.
pub fn generate<R, S>(rng: &mut R, total_leaves: usize, allowed_variables: &[S]) -> Node
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    generate_with(rng, total_leaves, allowed_variables, &GeneratorConfig::default())
}

/// Generates a random expression with exactly `total_leaves` literals.
///
/// # Panics
///
/// Panics if `total_leaves == 0`, `allowed_variables` is empty, or
/// `config.operators` is empty.
pub fn generate_with<R, S>(rng: &mut R, total_leaves: usize, allowed_variables: &[S], config: &GeneratorConfig) -> Node
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    assert!(total_leaves >= 1, "Cannot generate an expression with no leaves");
    assert!(!allowed_variables.is_empty(), "Cannot generate an expression without variables");
    assert!(!config.operators.is_empty(), "Cannot generate an expression without operators");

    let mut pool: Vec<&str> = allowed_variables.iter().map(|s| s.as_ref()).collect();
    pool.sort_unstable();
    pool.dedup();
    debug!("generate(leaves = {}, pool = {:?})", total_leaves, pool);

    let mut generator = Generator { rng, pool, config };
    let (node, _) = generator.build(total_leaves, None, &BTreeSet::new());
    debug!("generate: {}", node);
    node
}

struct Generator<'a, 'r, R: ?Sized> {
    rng: &'r mut R,
    pool: Vec<&'a str>,
    config: &'r GeneratorConfig,
}

impl<'a, R: Rng + ?Sized> Generator<'a, '_, R> {
    /// Builds a subtree with `leaves` literals avoiding the names in `excluded`
    /// where possible. Returns the subtree and the names it consumed for its
    /// own AND/OR chain (or the literal's name).
    fn build(&mut self, leaves: usize, parent: Option<Op>, excluded: &BTreeSet<&'a str>) -> (Node, BTreeSet<&'a str>) {
        let available = self.available(excluded);

        if leaves == 1 {
            let name = self.pick(&available);
            return (self.literal(name), BTreeSet::from([name]));
        }

        let op = self.choose_op(parent, available.len(), leaves);
        let left_leaves = self.rng.random_range(1..leaves);
        let right_leaves = leaves - left_leaves;

        let chained = matches!(op, Op::And | Op::Or);
        let mut chain = if chained && parent == Some(op) {
            excluded.clone()
        } else {
            BTreeSet::new()
        };
        let mut used = BTreeSet::new();

        // A single-leaf right child takes its name first, whatever the operator,
        // so two leaf siblings never share a name (`r ⊕ r`, `r ⇒ r`).
        let reserved = if right_leaves == 1 {
            let name = self.pick(&self.available(&chain));
            if chained {
                chain.insert(name);
                used.insert(name);
            }
            Some(name)
        } else {
            None
        };

        // Only children continuing this chain restrict their siblings.
        let continues = |child: &Node| chained && (child.is_literal() || child.op() == Some(op));

        let mut left_excluded = chain.clone();
        if left_leaves == 1 {
            left_excluded.extend(reserved);
        }
        let (left, left_used) = self.build(left_leaves, Some(op), &left_excluded);
        if continues(&left) {
            chain.extend(left_used.iter().copied());
            used.extend(left_used);
        }

        let right = match reserved {
            Some(name) => self.literal(name),
            None => {
                let (right, right_used) = self.build(right_leaves, Some(op), &chain);
                if continues(&right) {
                    used.extend(right_used);
                }
                right
            }
        };

        (Node::binary(op, left, right), used)
    }

    fn available(&self, excluded: &BTreeSet<&'a str>) -> Vec<&'a str> {
        self.pool.iter().copied().filter(|name| !excluded.contains(name)).collect()
    }

    fn pick(&mut self, available: &[&'a str]) -> &'a str {
        let candidates = if available.is_empty() {
            debug!("generate: variable pool exhausted, reusing a name");
            &self.pool[..]
        } else {
            available
        };
        candidates[self.rng.random_range(0..candidates.len())]
    }

    fn literal(&mut self, name: &str) -> Node {
        Node::Literal {
            name: name.to_owned(),
            negated: self.rng.random_bool(self.config.negation_probability),
        }
    }

    fn choose_op(&mut self, parent: Option<Op>, available: usize, leaves: usize) -> Op {
        let repeat = parent.filter(|op| matches!(op, Op::And | Op::Or));
        let mut candidates: Vec<(Op, u32)> = self
            .config
            .operators
            .iter()
            .map(|&op| {
                let weight = if repeat == Some(op) && available < leaves {
                    self.config.repeat_weight
                } else {
                    self.config.fresh_weight
                };
                (op, weight)
            })
            .collect();

        if let Some(p) = repeat {
            if available < 2 {
                candidates.retain(|&(op, _)| op != p);
                if candidates.is_empty() {
                    warn!("generate: only {} is allowed, repeating it with {} free names", p, available);
                    candidates.push((p, 1));
                }
            }
        }

        match candidates.choose_weighted(&mut *self.rng, |&(_, w)| w) {
            Ok(&(op, _)) => op,
            // All weights zero: fall back to a uniform choice.
            Err(_) => candidates[self.rng.random_range(0..candidates.len())].0,
        }
    }
}
