//! Edge types and operations

use crate::node::NodeId;
use crate::value::DataValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A directed edge between two node identities, with its own attribute map.
///
/// Edge identity is the ordered endpoint pair; `data` plays no part in
/// equality or hashing, so a graph can hold at most one edge per ordered
/// pair. Endpoints are referenced by id, never by owning the nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    origin: NodeId,
    target: NodeId,
    #[serde(default)]
    data: HashMap<String, DataValue>,
}

impl Edge {
    pub fn new(origin: NodeId, target: NodeId) -> Self {
        Self {
            origin,
            target,
            data: HashMap::new(),
        }
    }

    /// Replace the attribute map wholesale.
    pub fn with_data(mut self, data: HashMap<String, DataValue>) -> Self {
        self.data = data;
        self
    }

    /// Set a single attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn origin(&self) -> &NodeId {
        &self.origin
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    /// The ordered endpoint pair this edge is keyed by.
    pub fn key(&self) -> (NodeId, NodeId) {
        (self.origin.clone(), self.target.clone())
    }

    /// The same edge with its endpoints swapped; `data` is kept.
    pub fn reversed(self) -> Self {
        Self {
            origin: self.target,
            target: self.origin,
            data: self.data,
        }
    }

    pub fn data(&self) -> &HashMap<String, DataValue> {
        &self.data
    }

    /// Look up a single attribute.
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.data.get(key)
    }

    /// Merge the given properties into the attribute map, overwriting
    /// existing keys on conflict.
    pub fn update_properties(&mut self, props: HashMap<String, DataValue>) {
        self.data.extend(props);
    }

    /// Whether the given node id is one of this edge's endpoints.
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.origin == id || &self.target == id
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.target == other.target
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.target.hash(state);
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({} -> {})", self.origin, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    #[test]
    fn test_identity_ignores_data() {
        let a = Edge::new(id("n1"), id("n2")).with_attr("weight", 1.0);
        let b = Edge::new(id("n1"), id("n2")).with_attr("weight", 2.0);
        let c = Edge::new(id("n2"), id("n1")).with_attr("weight", 1.0);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_reversed_keeps_data() {
        let edge = Edge::new(id("n1"), id("n2")).with_attr("kind", "cites");
        let reversed = edge.reversed();

        assert_eq!(reversed.origin(), &id("n2"));
        assert_eq!(reversed.target(), &id("n1"));
        assert_eq!(reversed.get("kind"), Some(&DataValue::Str("cites".to_string())));
    }

    #[test]
    fn test_touches() {
        let edge = Edge::new(id("n1"), id("n2"));
        assert!(edge.touches(&id("n1")));
        assert!(edge.touches(&id("n2")));
        assert!(!edge.touches(&id("n3")));
    }
}
