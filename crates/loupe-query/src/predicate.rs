//! The common predicate surface over filters and searches

use crate::error::QueryResult;
use crate::filter::Filter;
use crate::search::Search;
use loupe_core::{DataValue, Edge, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anything carrying a typed attribute map a predicate can evaluate.
pub trait Attributed {
    fn attributes(&self) -> &HashMap<String, DataValue>;
}

impl Attributed for Node {
    fn attributes(&self) -> &HashMap<String, DataValue> {
        self.data()
    }
}

impl Attributed for Edge {
    fn attributes(&self) -> &HashMap<String, DataValue> {
        self.data()
    }
}

/// The closed set of predicate kinds a workspace can hold.
///
/// Structural equality carries over from the underlying predicate, so a
/// predicate collection can deduplicate by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    Filter(Filter),
    Search(Search),
}

impl Predicate {
    /// Evaluate against an entity. Search never fails; filter evaluation
    /// can raise the typed conditions described on [`Filter::apply`].
    pub fn apply<T: Attributed>(&self, entity: &T) -> QueryResult<bool> {
        match self {
            Predicate::Filter(filter) => filter.apply(entity),
            Predicate::Search(search) => Ok(search.apply(entity)),
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Predicate::Search(_))
    }
}

impl From<Filter> for Predicate {
    fn from(filter: Filter) -> Self {
        Predicate::Filter(filter)
    }
}

impl From<Search> for Predicate {
    fn from(search: Search) -> Self {
        Predicate::Search(search)
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Filter(filter) => filter.fmt(f),
            Predicate::Search(search) => search.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;
    use loupe_core::NodeId;

    #[test]
    fn test_dispatch() {
        let node = Node::new(NodeId::new("n").unwrap()).with_attr("age", 30);

        let filter: Predicate = Filter::new("age", Operator::Gt, 25).into();
        assert!(filter.apply(&node).unwrap());

        let search: Predicate = Search::new(30).into();
        assert!(search.apply(&node).unwrap());
    }

    #[test]
    fn test_applies_to_edges_too() {
        let edge = Edge::new(NodeId::new("a").unwrap(), NodeId::new("b").unwrap())
            .with_attr("weight", 2.5);

        let filter: Predicate = Filter::new("weight", Operator::Ge, 2.0).into();
        assert!(filter.apply(&edge).unwrap());
    }

    #[test]
    fn test_structural_dedup_across_kinds() {
        let a: Predicate = Filter::new("age", Operator::Gt, 25).into();
        let b: Predicate = Filter::new("age", Operator::Gt, 25).into();
        let c: Predicate = Search::new(25).into();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
