//! Error values returned by the engine.
//!
//! Malformed input text and oversized expressions are reported as values.
//! Contract violations by the caller (comparing fewer than two expressions,
//! generating with an empty budget) panic instead.

use thiserror::Error;

/// Why an expression could not be parsed.
///
/// Offsets count characters, not bytes, from the start of the source text.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("expected a variable or '(' at offset {offset} in `{text}`")]
    EmptyExpression { text: String, offset: usize },

    #[error("unexpected `{token}` at offset {offset} in `{text}`")]
    UnexpectedToken { token: String, text: String, offset: usize },

    #[error("expected an operator but found `{found}` at offset {offset} in `{text}`")]
    MissingOperator { found: String, text: String, offset: usize },

    #[error("unmatched parenthesis in `{text}`")]
    UnmatchedParenthesis { text: String },

    #[error("expression nests deeper than {max} levels at offset {offset}")]
    TooDeep { text: String, offset: usize, max: usize },
}

impl ParseError {
    /// The full source text that failed to parse.
    pub fn source_text(&self) -> &str {
        match self {
            ParseError::EmptyExpression { text, .. }
            | ParseError::UnexpectedToken { text, .. }
            | ParseError::MissingOperator { text, .. }
            | ParseError::UnmatchedParenthesis { text }
            | ParseError::TooDeep { text, .. } => text,
        }
    }

    /// Character offset of the problem, when one can be pinned down.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::EmptyExpression { offset, .. }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::MissingOperator { offset, .. }
            | ParseError::TooDeep { offset, .. } => Some(*offset),
            ParseError::UnmatchedParenthesis { .. } => None,
        }
    }
}

/// Failures of truth-table based operations.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LogicError {
    #[error("expression has {count} variables, at most {max} are supported")]
    TooManyVariables { count: usize, max: usize },
}
