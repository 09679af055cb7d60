//! # prop-logic: Propositional Logic Expressions in Rust
//!
//! **`prop-logic`** is a small engine for boolean expressions over named variables,
//! built for generating and grading logic exercises.
//!
//! ## What is inside?
//!
//! An expression is a binary tree of [`Node`]s: variables at the leaves and the connectives
//! AND, OR, XOR, IMPLIES and IFF at the inner nodes. Every node can be negated in place.
//! On top of the tree the crate provides:
//!
//! - **Parsing** of free text such as `NOT A AND (B => C)`, with structured errors instead of panics.
//! - **Truth tables** over the sorted variable list, plus tautology/contradiction checks.
//! - **Normal forms**: canonical CNF and DNF built from the truth table.
//! - **Rewrites** that keep the truth table: operator elimination, De Morgan negation pushdown,
//!   and a randomized shuffler producing many textually different but equivalent trees.
//! - **Equivalence** checking of any number of expressions.
//! - **Generation** of random expressions with an exact number of leaves.
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so a seeded RNG reproduces the
//! same questions.
//!
//! ## Basic Usage
//!
//! ```rust
//! use prop_logic::{compare_expressions, parse, Node};
//!
//! // Note: there is no precedence, `A op1 B op2 C` always reads as `A op1 (B op2 C)`.
//! let f = parse("NOT A AND B").unwrap();
//! let g = parse("NOT (B => A)").unwrap();
//! assert_eq!(compare_expressions(&[f.clone(), g]), Ok(true));
//!
//! let tt = f.truth_table().unwrap();
//! assert_eq!(tt.variables, vec!["A", "B"]);
//! assert_eq!(tt.table, vec![false, false, true, false]);
//!
//! let dnf = f.to_dnf().unwrap();
//! assert!(dnf.is_dnf());
//! assert_eq!(dnf, Node::not_var("A") & Node::var("B"));
//! ```
//!
//! ## Core Components
//!
//! - **[`node`]**: The expression tree and its constructors.
//! - **[`parser`]**: Text to tree, see the module docs for the accepted syntax.
//! - **[`table`]**: Truth tables; the row order is defined in [`assignment`].
//! - **[`shuffle`]** and **[`generator`]**: The randomized parts.

pub mod assignment;
pub mod display;
pub mod equivalence;
pub mod error;
pub mod eval;
pub mod generator;
pub mod node;
pub mod normal;
pub mod parser;
pub mod shuffle;
pub mod simplify;
pub mod table;
pub mod types;

pub use crate::equivalence::{compare_expressions, expressions_different};
pub use crate::error::{LogicError, ParseError};
pub use crate::generator::generate;
pub use crate::node::Node;
pub use crate::parser::parse;
pub use crate::table::TruthTable;
pub use crate::types::Op;
