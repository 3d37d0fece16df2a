//! Attribute filters - typed comparison predicates

use crate::error::{QueryError, QueryResult};
use crate::operator::Operator;
use crate::parse::parse_filter;
use crate::predicate::Attributed;
use loupe_core::DataValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A predicate comparing one attribute of an entity against a fixed value.
///
/// Structural equality over (attribute, operator, value) gives filters set
/// semantics in a workspace's active predicate collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    attribute: String,
    operator: Operator,
    value: DataValue,
}

impl Filter {
    pub fn new(attribute: impl Into<String>, operator: Operator, value: impl Into<DataValue>) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &DataValue {
        &self.value
    }

    /// Evaluate this filter against an entity's attribute map.
    ///
    /// An absent attribute does not pass (`Ok(false)`). A present attribute
    /// of a different variant, or an ordering comparison on a variant with
    /// no defined ordering, is a typed error the caller must handle.
    pub fn apply<T: Attributed>(&self, entity: &T) -> QueryResult<bool> {
        let Some(actual) = entity.attributes().get(&self.attribute) else {
            return Ok(false);
        };
        if !actual.same_variant(&self.value) {
            return Err(QueryError::TypeMismatch {
                attribute: self.attribute.clone(),
                expected: self.value.type_name(),
                found: actual.type_name(),
            });
        }

        match self.operator {
            Operator::Eq => Ok(actual == &self.value),
            Operator::Ne => Ok(actual != &self.value),
            Operator::Lt => Ok(compare(actual, &self.value)? == Ordering::Less),
            Operator::Le => Ok(compare(actual, &self.value)? != Ordering::Greater),
            Operator::Gt => Ok(compare(actual, &self.value)? == Ordering::Greater),
            Operator::Ge => Ok(compare(actual, &self.value)? != Ordering::Less),
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        parse_filter(s)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.operator, self.value)
    }
}

/// Ordering between two values of the same variant. Strings order lexically,
/// dates chronologically; booleans and unordered floats (NaN) have no
/// defined ordering.
fn compare(lhs: &DataValue, rhs: &DataValue) -> QueryResult<Ordering> {
    match (lhs, rhs) {
        (DataValue::Int(a), DataValue::Int(b)) => Ok(a.cmp(b)),
        (DataValue::Float(a), DataValue::Float(b)) => a
            .partial_cmp(b)
            .ok_or(QueryError::NotOrdered("float")),
        (DataValue::Str(a), DataValue::Str(b)) => Ok(a.cmp(b)),
        (DataValue::Date(a), DataValue::Date(b)) => Ok(a.cmp(b)),
        (DataValue::Bool(_), DataValue::Bool(_)) => Err(QueryError::NotOrdered("boolean")),
        (a, b) => Err(QueryError::TypeMismatch {
            attribute: String::new(),
            expected: b.type_name(),
            found: a.type_name(),
        }),
    }
}
