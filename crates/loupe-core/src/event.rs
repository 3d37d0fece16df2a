//! Graph change events delivered to observers

use crate::edge::Edge;
use crate::node::{Node, NodeId};
use crate::value::DataValue;
use std::collections::HashMap;

/// A single mutation applied to a graph.
///
/// Update events carry the changed-properties map that was merged in, not
/// the entity's full attribute map.
#[derive(Debug, Clone)]
pub enum GraphEvent {
    NodeAdded {
        node: Node,
    },
    EdgeAdded {
        edge: Edge,
    },
    NodeRemoved {
        id: NodeId,
    },
    EdgeRemoved {
        origin: NodeId,
        target: NodeId,
    },
    NodeUpdated {
        id: NodeId,
        changed: HashMap<String, DataValue>,
    },
    EdgeUpdated {
        origin: NodeId,
        target: NodeId,
        changed: HashMap<String, DataValue>,
    },
    Cleared,
}

impl GraphEvent {
    /// Stable event name, as surfaced to external subscribers.
    pub fn name(&self) -> &'static str {
        match self {
            GraphEvent::NodeAdded { .. } => "add_node",
            GraphEvent::EdgeAdded { .. } => "add_edge",
            GraphEvent::NodeRemoved { .. } => "remove_node",
            GraphEvent::EdgeRemoved { .. } => "remove_edge",
            GraphEvent::NodeUpdated { .. } => "update_node",
            GraphEvent::EdgeUpdated { .. } => "update_edge",
            GraphEvent::Cleared => "clear_graph",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let id = NodeId::new("n1").unwrap();
        let event = GraphEvent::NodeAdded {
            node: Node::new(id.clone()),
        };
        assert_eq!(event.name(), "add_node");

        let event = GraphEvent::NodeUpdated {
            id,
            changed: HashMap::new(),
        };
        assert_eq!(event.name(), "update_node");

        assert_eq!(GraphEvent::Cleared.name(), "clear_graph");
    }
}
