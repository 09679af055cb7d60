//! Equivalence of several expressions over the union of their variables.

use std::collections::BTreeSet;

use log::debug;

use crate::assignment::Assignment;
use crate::error::LogicError;
use crate::node::Node;
use crate::table::check_variable_count;

/// Sorted union of the variables of all `exprs`.
pub fn shared_variables<'a>(exprs: impl IntoIterator<Item = &'a Node>) -> Vec<String> {
    let mut names = BTreeSet::new();
    for expr in exprs {
        expr.collect_names(&mut names);
    }
    names.into_iter().map(str::to_owned).collect()
}

fn assert_enough(count: usize) {
    assert!(
        count >= 2,
        "Invalid argument: comparing requires at least two expressions, got {}",
        count
    );
}

/// Returns true if all expressions have the same value under every
/// assignment of the union of their variables.
///
/// # Panics
///
/// Panics if fewer than two expressions are given.
pub fn compare_expressions(exprs: &[Node]) -> Result<bool, LogicError> {
    assert_enough(exprs.len());
    let refs: Vec<&Node> = exprs.iter().collect();
    all_agree(&refs)
}

/// Returns true if no two of the expressions are equivalent.
///
/// # Panics
///
/// Panics if fewer than two expressions are given.
pub fn expressions_different(exprs: &[Node]) -> Result<bool, LogicError> {
    assert_enough(exprs.len());
    for (i, a) in exprs.iter().enumerate() {
        for b in &exprs[i + 1..] {
            if all_agree(&[a, b])? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

fn all_agree(exprs: &[&Node]) -> Result<bool, LogicError> {
    let variables = shared_variables(exprs.iter().copied());
    check_variable_count(variables.len())?;
    debug!("compare: {} expressions over {:?}", exprs.len(), variables);

    let (baseline, rest) = (exprs[0], &exprs[1..]);
    for a in Assignment::rows(&variables) {
        let expected = baseline.eval(&a);
        if rest.iter().any(|e| e.eval(&a) != expected) {
            debug!("compare: mismatch at {}", a);
            return Ok(false);
        }
    }
    Ok(true)
}

impl Node {
    pub fn is_equivalent(&self, other: &Node) -> Result<bool, LogicError> {
        all_agree(&[self, other])
    }
}
