//! Loupe Core - graph data model for the Loupe exploration engine
//!
//! This crate provides the identity-keyed node/edge/graph model, the typed
//! attribute values they carry, and the synchronous change-notification
//! mechanism the rest of the system builds on.

pub mod edge;
pub mod error;
pub mod event;
pub mod graph;
pub mod node;
pub mod observer;
pub mod value;

pub use edge::Edge;
pub use error::{Error, Result};
pub use event::GraphEvent;
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use observer::{ChangeObserver, ObserverHandle, ObserverRegistry};
pub use value::DataValue;
