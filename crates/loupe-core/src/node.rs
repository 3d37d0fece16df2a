//! Node types and operations

use crate::error::{Error, Result};
use crate::value::DataValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a node.
///
/// Ids are caller-supplied non-empty strings and are immutable once
/// constructed: re-keying a node means removing it from its graph and
/// inserting a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::EmptyNodeId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the graph: an identity plus a typed attribute map.
///
/// Equality and hashing consider the id only; two nodes with the same id
/// are interchangeable for membership purposes even if their data differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    #[serde(default)]
    data: HashMap<String, DataValue>,
}

impl Node {
    /// Create a node with an empty attribute map.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
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

    pub fn id(&self) -> &NodeId {
        &self.id
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
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.id)
    }
}
