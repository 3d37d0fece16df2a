//! Capability traits for the surrounding application
//!
//! Data sources feed a workspace its initial graph; renderers consume a
//! graph for presentation. Both are resolved statically by the host and
//! injected, never discovered dynamically.

use loupe_core::Graph;

/// Supplier of a workspace's source graph.
///
/// `load_graph` is invoked exactly once per workspace, at construction.
/// A plugin that is expensive to load is responsible for its own caching.
pub trait DataSourcePlugin {
    /// Human-readable plugin name.
    fn name(&self) -> &str;

    /// Load the initial graph from the underlying data source.
    fn load_graph(&self) -> anyhow::Result<Graph>;
}

/// Consumer of a graph for presentation.
///
/// The core guarantees only the graph shape (nodes with id and data, edges
/// with origin/target ids, the directed flag); presentation is the
/// renderer's concern.
pub trait GraphRenderer {
    /// Stable identifier the host uses to select a renderer.
    fn identifier(&self) -> &str;

    /// Produce a rendering of the given graph.
    fn render(&self, graph: &Graph) -> anyhow::Result<String>;
}
