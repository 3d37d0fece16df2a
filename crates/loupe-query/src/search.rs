//! Search - exact-match lookup across an entity's keys and values

use crate::parse::parse_value;
use crate::predicate::Attributed;
use loupe_core::DataValue;
use serde::{Deserialize, Serialize};

/// A fixed-shape predicate matching a value anywhere in an entity's
/// attribute map.
///
/// Matching is exact equality against any attribute key or any attribute
/// value, not substring containment. A string search term can match either
/// a key or a string value; non-string terms can only match values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Search {
    value: DataValue,
}

impl Search {
    pub fn new(value: impl Into<DataValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Build a search from raw text, type-inferring the term the same way
    /// the filter mini-language does.
    pub fn parse(text: &str) -> Self {
        Self {
            value: parse_value(text.trim()),
        }
    }

    pub fn value(&self) -> &DataValue {
        &self.value
    }

    /// True iff the search term equals any key or any value in the
    /// entity's attribute map.
    pub fn apply<T: Attributed>(&self, entity: &T) -> bool {
        entity.attributes().iter().any(|(key, value)| {
            if let DataValue::Str(term) = &self.value {
                if term == key {
                    return true;
                }
            }
            value == &self.value
        })
    }
}

impl std::fmt::Display for Search {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "search {}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loupe_core::{Node, NodeId};

    fn movie() -> Node {
        Node::new(NodeId::new("m1").unwrap())
            .with_attr("title", "Alien")
            .with_attr("year", 1979)
    }

    #[test]
    fn test_matches_a_key() {
        assert!(Search::new("title").apply(&movie()));
    }

    #[test]
    fn test_matches_a_value() {
        assert!(Search::new("Alien").apply(&movie()));
        assert!(Search::new(1979).apply(&movie()));
    }

    #[test]
    fn test_no_match() {
        assert!(!Search::new("Blade Runner").apply(&movie()));
        assert!(!Search::new(1982).apply(&movie()));
    }

    #[test]
    fn test_exact_match_not_substring() {
        assert!(!Search::new("Ali").apply(&movie()));
        assert!(!Search::new("tit").apply(&movie()));
    }

    #[test]
    fn test_parse_infers_type() {
        assert_eq!(Search::parse("1979").value(), &DataValue::Int(1979));
        assert_eq!(
            Search::parse("Alien").value(),
            &DataValue::Str("Alien".to_string())
        );
    }
}
