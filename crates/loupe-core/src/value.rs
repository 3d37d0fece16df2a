//! Attribute value type - the closed set of primitives a node or edge can carry

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single attribute value.
///
/// The variant order matches the inference order of the textual filter
/// grammar (integer, float, boolean, date, string), which also makes the
/// untagged serde representation probe variants in the right order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Str(String),
}

impl DataValue {
    /// Human-readable variant name, used in type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Int(_) => "integer",
            DataValue::Float(_) => "float",
            DataValue::Bool(_) => "boolean",
            DataValue::Date(_) => "date",
            DataValue::Str(_) => "string",
        }
    }

    /// Whether two values hold the same variant.
    pub fn same_variant(&self, other: &DataValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for DataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataValue::Int(v) => write!(f, "{}", v),
            DataValue::Float(v) => write!(f, "{}", v),
            DataValue::Bool(v) => write!(f, "{}", v),
            DataValue::Date(v) => write!(f, "{}", v),
            DataValue::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        DataValue::Int(v)
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Float(v)
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

impl From<NaiveDate> for DataValue {
    fn from(v: NaiveDate) -> Self {
        DataValue::Date(v)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Str(v.to_string())
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(DataValue::Int(1).type_name(), "integer");
        assert_eq!(DataValue::Float(1.5).type_name(), "float");
        assert_eq!(DataValue::Bool(true).type_name(), "boolean");
        assert_eq!(DataValue::Str("x".into()).type_name(), "string");
    }

    #[test]
    fn test_same_variant() {
        assert!(DataValue::Int(1).same_variant(&DataValue::Int(99)));
        assert!(!DataValue::Int(1).same_variant(&DataValue::Float(1.0)));
        assert!(!DataValue::Str("1".into()).same_variant(&DataValue::Int(1)));
    }

    #[test]
    fn test_no_cross_variant_equality() {
        assert_ne!(DataValue::Int(1), DataValue::Float(1.0));
        assert_ne!(DataValue::Str("true".into()), DataValue::Bool(true));
    }

    #[test]
    fn test_json_representation() {
        let json = serde_json::to_value(DataValue::Int(30)).unwrap();
        assert_eq!(json, serde_json::json!(30));

        let json = serde_json::to_value(DataValue::Str("alice".into())).unwrap();
        assert_eq!(json, serde_json::json!("alice"));
    }
}
