//! Normal forms built from the truth table.
//!
//! CNF gets one clause per falsifying row, the clause ruling out exactly that
//! row; DNF gets one term per satisfying row. Since the construction reads
//! only the truth table, the result is equivalent to the input by
//! construction.
//!
//! A tautology has no falsifying rows, so its CNF would be an empty
//! conjunction (and a contradiction's DNF an empty disjunction). There is no
//! constant node, so these cases produce one trivially true clause `(v ∨ ¬v)`
//! (resp. trivially false term `(v ∧ ¬v)`) per variable. The result is still
//! in the requested shape and keeps the input's variable list.

use log::debug;

use crate::assignment::Assignment;
use crate::error::LogicError;
use crate::node::Node;
use crate::types::{NormalForm, Op};

impl Node {
    pub fn to_cnf(&self) -> Result<Node, LogicError> {
        self.to_normal_form(NormalForm::Cnf)
    }

    pub fn to_dnf(&self) -> Result<Node, LogicError> {
        self.to_normal_form(NormalForm::Dnf)
    }

    pub fn to_normal_form(&self, form: NormalForm) -> Result<Node, LogicError> {
        let tt = self.truth_table()?;

        // CNF clauses come from rows where the expression is false.
        let wanted = form == NormalForm::Dnf;
        let groups: Vec<Node> = tt
            .rows()
            .filter(|&(_, value)| value == wanted)
            .filter_map(|(row, _)| row_group(&row, form))
            .collect();
        debug!("to_normal_form({}): {} {} groups", self, groups.len(), form);

        let groups = if groups.is_empty() {
            tt.variables
                .iter()
                .map(|v| Node::binary(form.inner(), Node::var(v.as_str()), Node::not_var(v.as_str())))
                .collect()
        } else {
            groups
        };

        // A tree always has at least one variable, so `groups` is non-empty here.
        Ok(Node::fold(form.outer(), groups).unwrap_or_else(|| self.clone()))
    }

    pub fn is_cnf(&self) -> bool {
        self.is_normal_form(NormalForm::Cnf)
    }

    pub fn is_dnf(&self) -> bool {
        self.is_normal_form(NormalForm::Dnf)
    }

    pub fn is_normal_form(&self, form: NormalForm) -> bool {
        match self {
            Node::Operator { left, right, .. } if self.is_plain(form.outer()) => {
                left.is_normal_form(form) && right.is_normal_form(form)
            }
            _ => self.is_group(form.inner()),
        }
    }

    /// A flat (unnegated) `op`-tree over literals.
    fn is_group(&self, op: Op) -> bool {
        match self {
            Node::Literal { .. } => true,
            Node::Operator { left, right, .. } => self.is_plain(op) && left.is_group(op) && right.is_group(op),
        }
    }
}

/// Clause (CNF) or term (DNF) for one row, literals in variable order.
///
/// In a clause a variable that is true in the row appears negated; in a term
/// it appears positive.
fn row_group(row: &Assignment<'_>, form: NormalForm) -> Option<Node> {
    let literals = row.iter().map(|(name, value)| {
        let negated = match form {
            NormalForm::Cnf => value,
            NormalForm::Dnf => !value,
        };
        Node::Literal {
            name: name.to_owned(),
            negated,
        }
    });
    Node::fold(form.inner(), literals)
}
