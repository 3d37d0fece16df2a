//! Comparison operators for filters

use crate::error::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};

/// The closed set of comparison operators a filter supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// Whether this operator needs an ordering between its operands, as
    /// opposed to plain equality.
    pub fn is_ordering(&self) -> bool {
        !matches!(self, Operator::Eq | Operator::Ne)
    }
}

impl std::str::FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        match s {
            "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            other => Err(QueryError::InvalidOperator(other.to_string())),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for op in [
            Operator::Eq,
            Operator::Ne,
            Operator::Lt,
            Operator::Le,
            Operator::Gt,
            Operator::Ge,
        ] {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_invalid_operator_rejected() {
        assert!(matches!(
            "=".parse::<Operator>(),
            Err(QueryError::InvalidOperator(_))
        ));
        assert!(matches!(
            "contains".parse::<Operator>(),
            Err(QueryError::InvalidOperator(_))
        ));
    }

    #[test]
    fn test_is_ordering() {
        assert!(!Operator::Eq.is_ordering());
        assert!(!Operator::Ne.is_ordering());
        assert!(Operator::Lt.is_ordering());
        assert!(Operator::Ge.is_ordering());
    }
}
