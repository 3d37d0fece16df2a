//! Mutable, observable graph of nodes and edges
//!
//! The graph owns two index maps: nodes keyed by id and edges keyed by the
//! ordered endpoint pair. Every mutating operation is invariant-preserving
//! and atomic from the caller's point of view, and notifies subscribers
//! only after it has been applied.

use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::event::GraphEvent;
use crate::node::{Node, NodeId};
use crate::observer::{ObserverHandle, ObserverRegistry};
use crate::value::DataValue;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::HashMap;

/// A graph of attribute-carrying nodes and edges.
///
/// Invariants:
/// - every edge's endpoints are present in the node map (enforced on insert);
/// - a node with incident edges cannot be removed;
/// - at most one edge exists per ordered endpoint pair;
/// - an undirected graph stores only the reversed orientation of each
///   inserted edge, never both and never the original.
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<(NodeId, NodeId), Edge>,
    directed: bool,
    observers: ObserverRegistry,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            directed,
            observers: ObserverRegistry::new(),
        }
    }

    /// Build a graph from already-prepared parts.
    ///
    /// Edges are stored exactly as given, with no orientation rewrite, so
    /// this is the path for reconstructing a graph whose edges were already
    /// normalized (deep copies, filtered views). Every edge endpoint must be
    /// present among the given nodes.
    pub fn from_parts(
        directed: bool,
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        let mut graph = Graph::new(directed);
        for node in nodes {
            graph.nodes.insert(node.id().clone(), node);
        }
        for edge in edges {
            for endpoint in [edge.origin(), edge.target()] {
                if !graph.nodes.contains_key(endpoint) {
                    return Err(Error::EndpointMissing(endpoint.clone()));
                }
            }
            graph.edges.insert(edge.key(), edge);
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pure lookup by id; never notifies or mutates.
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Pure lookup by the ordered endpoint pair; never notifies or mutates.
    /// In an undirected graph the stored orientation is the reverse of the
    /// inserted one, so look up accordingly.
    pub fn get_edge(&self, origin: &NodeId, target: &NodeId) -> Option<&Edge> {
        self.edges.get(&(origin.clone(), target.clone()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Number of stored edges touching the given node id.
    pub fn incident_edge_count(&self, id: &NodeId) -> usize {
        self.edges.values().filter(|e| e.touches(id)).count()
    }

    /// Insert a node. The first insert for an id wins: if a node with the
    /// same id already exists the call is a silent no-op, the existing data
    /// is kept, and no notification is emitted. Returns whether the node
    /// was inserted.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(node.id()) {
            return false;
        }
        tracing::debug!(id = %node.id(), "adding node");
        let event = GraphEvent::NodeAdded { node: node.clone() };
        self.nodes.insert(node.id().clone(), node);
        self.observers.notify(self, &event);
        true
    }

    /// Insert an edge. For an undirected graph the reversed orientation is
    /// stored instead of the given one, and an edge already present under
    /// either orientation makes the call a silent no-op with no
    /// re-notification. Missing endpoint nodes are auto-inserted with empty
    /// data. Returns whether the edge was inserted.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if !self.directed && self.edges.contains_key(&edge.key()) {
            return false;
        }
        let edge = if self.directed { edge } else { edge.reversed() };
        let key = edge.key();
        if self.edges.contains_key(&key) {
            return false;
        }
        for endpoint in [&key.0, &key.1] {
            if !self.nodes.contains_key(endpoint) {
                self.nodes
                    .insert(endpoint.clone(), Node::new(endpoint.clone()));
            }
        }
        tracing::debug!(origin = %key.0, target = %key.1, "adding edge");
        let event = GraphEvent::EdgeAdded { edge: edge.clone() };
        self.edges.insert(key, edge);
        self.observers.notify(self, &event);
        true
    }

    /// Remove a node. Fails if the id is absent or if any stored edge still
    /// references it; there is no cascading delete.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<Node> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NodeNotFound(id.clone()));
        }
        let edge_count = self.incident_edge_count(id);
        if edge_count > 0 {
            return Err(Error::NodeHasEdges {
                id: id.clone(),
                edge_count,
            });
        }
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| Error::NodeNotFound(id.clone()))?;
        tracing::debug!(%id, "removed node");
        self.observers
            .notify(self, &GraphEvent::NodeRemoved { id: id.clone() });
        Ok(node)
    }

    /// Remove the edge stored under the given ordered endpoint pair.
    pub fn remove_edge(&mut self, origin: &NodeId, target: &NodeId) -> Result<Edge> {
        let edge = self
            .edges
            .remove(&(origin.clone(), target.clone()))
            .ok_or_else(|| Error::EdgeNotFound {
                origin: origin.clone(),
                target: target.clone(),
            })?;
        tracing::debug!(%origin, %target, "removed edge");
        self.observers.notify(
            self,
            &GraphEvent::EdgeRemoved {
                origin: origin.clone(),
                target: target.clone(),
            },
        );
        Ok(edge)
    }

    /// Merge properties into an existing node's attribute map.
    pub fn update_node(&mut self, id: &NodeId, props: HashMap<String, DataValue>) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| Error::NodeNotFound(id.clone()))?;
        node.update_properties(props.clone());
        tracing::debug!(%id, changed = props.len(), "updated node");
        self.observers.notify(
            self,
            &GraphEvent::NodeUpdated {
                id: id.clone(),
                changed: props,
            },
        );
        Ok(())
    }

    /// Merge properties into an existing edge's attribute map.
    pub fn update_edge(
        &mut self,
        origin: &NodeId,
        target: &NodeId,
        props: HashMap<String, DataValue>,
    ) -> Result<()> {
        let edge = self
            .edges
            .get_mut(&(origin.clone(), target.clone()))
            .ok_or_else(|| Error::EdgeNotFound {
                origin: origin.clone(),
                target: target.clone(),
            })?;
        edge.update_properties(props.clone());
        tracing::debug!(%origin, %target, changed = props.len(), "updated edge");
        self.observers.notify(
            self,
            &GraphEvent::EdgeUpdated {
                origin: origin.clone(),
                target: target.clone(),
                changed: props,
            },
        );
        Ok(())
    }

    /// Empty the graph, emitting a single `clear_graph` event rather than
    /// per-entity removals.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        tracing::debug!("cleared graph");
        self.observers.notify(self, &GraphEvent::Cleared);
    }

    /// Independent copy of the graph: every node and edge is cloned, the
    /// directed flag is kept, and the subscriber set starts empty unless
    /// `copy_observers` asks for the same handles to be re-attached.
    pub fn deep_copy(&self, copy_observers: bool) -> Graph {
        Graph {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            directed: self.directed,
            observers: if copy_observers {
                self.observers.clone()
            } else {
                ObserverRegistry::new()
            },
        }
    }

    /// Subscribe an observer; idempotent per observer identity.
    pub fn attach(&mut self, observer: ObserverHandle) -> bool {
        self.observers.attach(observer)
    }

    /// Unsubscribe an observer; a miss is a no-op returning false.
    pub fn detach(&mut self, observer: &ObserverHandle) -> bool {
        self.observers.detach(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("directed", &self.directed)
            .field("observers", &self.observers)
            .finish()
    }
}

// The serialized shape is the render contract: nodes with id and data,
// edges with origin/target ids and data, plus the directed flag. Entries
// are sorted so output is deterministic.
impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut nodes: Vec<&Node> = self.nodes.values().collect();
        nodes.sort_by(|a, b| a.id().cmp(b.id()));
        let mut edges: Vec<&Edge> = self.edges.values().collect();
        edges.sort_by(|a, b| (a.origin(), a.target()).cmp(&(b.origin(), b.target())));

        let mut state = serializer.serialize_struct("Graph", 3)?;
        state.serialize_field("nodes", &nodes)?;
        state.serialize_field("edges", &edges)?;
        state.serialize_field("directed", &self.directed)?;
        state.end()
    }
}
