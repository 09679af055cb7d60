//! Truth tables.
//!
//! Enumeration is `O(2^k)` in the number of variables `k`, so every entry
//! point checks `k` against [`MAX_VARIABLES`] before visiting any row.

use std::fmt;

use log::debug;

use crate::assignment::Assignment;
use crate::error::LogicError;
use crate::node::Node;

/// Largest variable count any enumeration will accept.
pub const MAX_VARIABLES: usize = 16;

pub(crate) fn check_variable_count(count: usize) -> Result<(), LogicError> {
    if count > MAX_VARIABLES {
        return Err(LogicError::TooManyVariables {
            count,
            max: MAX_VARIABLES,
        });
    }
    Ok(())
}

/// Output of an expression for every assignment of its variables.
///
/// `table[idx]` is the value at the assignment encoded by `idx`
/// (bit `i` of `idx` is the value of `variables[i]`).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub table: Vec<bool>,
}

impl TruthTable {
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// `(assignment, value)` for every row, in index order.
    pub fn rows(&self) -> impl Iterator<Item = (Assignment<'_>, bool)> + '_ {
        Assignment::rows(&self.variables).zip(self.table.iter().copied())
    }

    pub fn satisfying_rows(&self) -> impl Iterator<Item = Assignment<'_>> + '_ {
        self.rows().filter(|(_, value)| *value).map(|(a, _)| a)
    }

    pub fn falsifying_rows(&self) -> impl Iterator<Item = Assignment<'_>> + '_ {
        self.rows().filter(|(_, value)| !*value).map(|(a, _)| a)
    }

    /// Number of satisfying rows.
    pub fn count_true(&self) -> usize {
        self.table.iter().filter(|&&b| b).count()
    }

    pub fn is_tautology(&self) -> bool {
        self.table.iter().all(|&b| b)
    }

    pub fn is_contradiction(&self) -> bool {
        self.table.iter().all(|&b| !b)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.variables.iter().map(|v| v.chars().count()).collect();
        for (name, w) in self.variables.iter().zip(&widths) {
            write!(f, "{:>w$} ", name, w = *w)?;
        }
        writeln!(f, "| out")?;
        for (assignment, value) in self.rows() {
            for ((_, bit), w) in assignment.iter().zip(&widths) {
                write!(f, "{:>w$} ", bit as u8, w = *w)?;
            }
            writeln!(f, "| {}", value as u8)?;
        }
        Ok(())
    }
}

/// First satisfying and first falsifying row, if any.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Properties {
    pub satisfying: Option<u64>,
    pub falsifying: Option<u64>,
}

impl Properties {
    pub fn is_satisfiable(&self) -> bool {
        self.satisfying.is_some()
    }

    pub fn is_falsifiable(&self) -> bool {
        self.falsifying.is_some()
    }

    pub fn is_tautology(&self) -> bool {
        !self.is_falsifiable()
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }
}

impl Node {
    pub fn truth_table(&self) -> Result<TruthTable, LogicError> {
        let variables = self.variable_names();
        check_variable_count(variables.len())?;
        debug!("truth_table({}) over {} variables", self, variables.len());

        let table = Assignment::rows(&variables).map(|a| self.eval(&a)).collect();
        Ok(TruthTable { variables, table })
    }

    /// Scans rows in index order until both a satisfying and a falsifying
    /// assignment have been seen.
    pub fn properties(&self) -> Result<Properties, LogicError> {
        let variables = self.variable_names();
        check_variable_count(variables.len())?;

        let mut props = Properties::default();
        for a in Assignment::rows(&variables) {
            let slot = if self.eval(&a) {
                &mut props.satisfying
            } else {
                &mut props.falsifying
            };
            if slot.is_none() {
                *slot = Some(a.index());
            }
            if props.satisfying.is_some() && props.falsifying.is_some() {
                break;
            }
        }
        Ok(props)
    }
}
