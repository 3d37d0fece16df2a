//! Error types for Loupe Query

use thiserror::Error;

/// Result type alias using the query error
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Query error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid operator: {0} (expected one of ==, !=, <, <=, >, >=)")]
    InvalidOperator(String),

    #[error("Invalid filter expression: {0}")]
    InvalidExpression(String),

    #[error("Type mismatch on attribute '{attribute}': entity holds {found}, predicate expects {expected}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Values of type {0} have no defined ordering")]
    NotOrdered(&'static str),
}
