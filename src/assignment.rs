//! Variable-assignment codec.
//!
//! For an ordered variable list `[v0 < v1 < ... < v(k-1)]`, an assignment is
//! the integer `idx` in `[0, 2^k)` whose bit `i` is the value of `v_i`.
//! Row `0` sets every variable to false; bits beyond `k` are ignored.

use std::fmt;

use crate::eval::Valuation;

/// One row of a truth table: a variable list plus the row index.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Assignment<'a> {
    variables: &'a [String],
    index: u64,
}

impl<'a> Assignment<'a> {
    /// Decodes `index` over `variables`, which must be sorted.
    pub fn new(variables: &'a [String], index: u64) -> Self {
        debug_assert!(variables.windows(2).all(|w| w[0] < w[1]), "Variables must be sorted and unique");
        Self { variables, index }
    }

    /// Encodes the values looked up in `valuation` into a row index.
    pub fn encode(variables: &[String], valuation: &impl Valuation) -> u64 {
        variables
            .iter()
            .enumerate()
            .filter(|(_, name)| valuation.value(name))
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }

    /// All `2^k` assignments over `variables`, in increasing index order.
    pub fn rows(variables: &'a [String]) -> impl Iterator<Item = Assignment<'a>> {
        (0..1u64 << variables.len()).map(move |index| Assignment::new(variables, index))
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn variables(&self) -> &'a [String] {
        self.variables
    }

    /// Value of the `i`-th variable.
    pub fn bit(&self, i: usize) -> bool {
        i < 64 && (self.index >> i) & 1 == 1
    }

    /// Value of the named variable; unknown names are false.
    pub fn value(&self, name: &str) -> bool {
        match self.variables.binary_search_by(|v| v.as_str().cmp(name)) {
            Ok(i) => self.bit(i),
            Err(_) => false,
        }
    }

    /// `(name, value)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, bool)> + '_ {
        self.variables.iter().enumerate().map(move |(i, name)| (name.as_str(), self.bit(i)))
    }
}

impl Valuation for Assignment<'_> {
    fn value(&self, name: &str) -> bool {
        Assignment::value(self, name)
    }
}

impl fmt::Display for Assignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value as u8)?;
        }
        write!(f, "}}")
    }
}
