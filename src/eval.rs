use std::collections::{BTreeMap, HashMap};

use crate::node::Node;

/// Source of variable values for [`Node::eval`].
///
/// Variables the valuation does not know evaluate as false.
pub trait Valuation {
    fn value(&self, name: &str) -> bool;
}

impl Valuation for HashMap<String, bool> {
    fn value(&self, name: &str) -> bool {
        self.get(name).copied().unwrap_or(false)
    }
}

impl Valuation for HashMap<&str, bool> {
    fn value(&self, name: &str) -> bool {
        self.get(name).copied().unwrap_or(false)
    }
}

impl Valuation for BTreeMap<String, bool> {
    fn value(&self, name: &str) -> bool {
        self.get(name).copied().unwrap_or(false)
    }
}

impl Node {
    /// Evaluates the tree under `valuation`.
    pub fn eval(&self, valuation: &impl Valuation) -> bool {
        match self {
            Node::Literal { name, negated } => valuation.value(name) ^ negated,
            Node::Operator {
                op,
                left,
                right,
                negated,
            } => op.apply(left.eval(valuation), right.eval(valuation)) ^ negated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Op;

    use test_log::test;

    fn env(pairs: &[(&'static str, bool)]) -> HashMap<&'static str, bool> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_eval_literal() {
        assert!(Node::var("A").eval(&env(&[("A", true)])));
        assert!(!Node::not_var("A").eval(&env(&[("A", true)])));
    }

    #[test]
    fn test_eval_undefined_is_false() {
        assert!(!Node::var("Q").eval(&env(&[])));
        assert!(Node::not_var("Q").eval(&env(&[])));
    }

    #[test]
    fn test_eval_and() {
        let f = Node::var("A") & Node::var("B");
        assert!(!f.eval(&env(&[("A", true), ("B", false)])));
        assert!(f.eval(&env(&[("A", true), ("B", true)])));
    }

    #[test]
    fn test_eval_operators() {
        for op in Op::ALL {
            let f = Node::binary(op, Node::var("a"), Node::var("b"));
            for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
                let v = env(&[("a", a), ("b", b)]);
                assert_eq!(f.eval(&v), op.apply(a, b), "{:?} at a={} b={}", op, a, b);
                assert_eq!((!f.clone()).eval(&v), !op.apply(a, b));
            }
        }
    }

    #[test]
    fn test_eval_string_map() {
        let mut v = BTreeMap::new();
        v.insert("A".to_string(), true);
        assert!((Node::var("A") | Node::var("B")).eval(&v));
    }
}
