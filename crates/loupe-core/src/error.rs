//! Error types for Loupe Core

use crate::node::NodeId;
use thiserror::Error;

/// Result type alias using Loupe's core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Loupe core error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Node id must be a non-empty string")]
    EmptyNodeId,

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Edge not found: {origin} -> {target}")]
    EdgeNotFound { origin: NodeId, target: NodeId },

    #[error("Cannot remove node {id}: {edge_count} incident edge(s)")]
    NodeHasEdges { id: NodeId, edge_count: usize },

    #[error("Edge endpoint not present in graph: {0}")]
    EndpointMissing(NodeId),
}
