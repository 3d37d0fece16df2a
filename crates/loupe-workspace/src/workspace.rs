//! Workspace - a source graph plus a continuously-consistent filtered view
//!
//! A workspace owns one source graph (loaded once from a data source
//! plugin), a set of active predicates, and a cached filtered view. It
//! subscribes to the source graph, so every mutation triggers a full
//! recompute of the view; predicate changes trigger the same recompute
//! without touching the source. The view is replaced wholesale on every
//! recompute, never edited in place, so readers holding the previous view
//! are unaffected.

use crate::error::{WorkspaceError, WorkspaceResult};
use crate::plugin::DataSourcePlugin;
use loupe_core::{ChangeObserver, Edge, Graph, GraphEvent, Node, NodeId};
use loupe_query::{parse_filter, Filter, Predicate, Search};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Input accepted by `add_filter`/`remove_filter`: either an already-built
/// predicate or a textual filter expression.
pub enum PredicateSpec {
    Predicate(Predicate),
    Text(String),
}

impl PredicateSpec {
    fn resolve(self) -> WorkspaceResult<Predicate> {
        match self {
            PredicateSpec::Predicate(predicate) => Ok(predicate),
            PredicateSpec::Text(text) => Ok(Predicate::Filter(parse_filter(&text)?)),
        }
    }
}

impl From<Predicate> for PredicateSpec {
    fn from(predicate: Predicate) -> Self {
        PredicateSpec::Predicate(predicate)
    }
}

impl From<Filter> for PredicateSpec {
    fn from(filter: Filter) -> Self {
        PredicateSpec::Predicate(Predicate::Filter(filter))
    }
}

impl From<Search> for PredicateSpec {
    fn from(search: Search) -> Self {
        PredicateSpec::Predicate(Predicate::Search(search))
    }
}

impl From<&str> for PredicateSpec {
    fn from(text: &str) -> Self {
        PredicateSpec::Text(text.to_string())
    }
}

impl From<String> for PredicateSpec {
    fn from(text: String) -> Self {
        PredicateSpec::Text(text)
    }
}

/// The mutable half of a workspace: active predicates and the cached view.
/// Registered as the observer on the source graph.
struct ViewState {
    filters: RefCell<Vec<Predicate>>,
    view: RefCell<Rc<Graph>>,
}

impl ViewState {
    /// Recompute the cached view from the given source graph.
    ///
    /// With no active predicates the view is an independent deep copy of
    /// the source. Otherwise a node survives iff every predicate passes;
    /// a predicate error (type mismatch, undefined ordering) is absorbed
    /// as "does not pass" so one bad attribute cannot abort the recompute.
    /// Edges survive iff both endpoints survive; edge data is never
    /// consulted.
    fn rebuild(&self, source: &Graph) {
        let filters = self.filters.borrow();
        let view = if filters.is_empty() {
            source.deep_copy(false)
        } else {
            let nodes: Vec<Node> = source
                .nodes()
                .filter(|node| passes_all(*node, &filters))
                .cloned()
                .collect();
            let surviving: HashSet<&NodeId> = nodes.iter().map(Node::id).collect();
            let edges: Vec<Edge> = source
                .edges()
                .filter(|edge| surviving.contains(edge.origin()) && surviving.contains(edge.target()))
                .cloned()
                .collect();
            // Endpoints of every kept edge are in the kept node set, so
            // reconstruction cannot fail.
            Graph::from_parts(source.is_directed(), nodes, edges).unwrap_or_else(|error| {
                tracing::warn!(%error, "filtered view rebuild failed, view degraded to empty");
                Graph::new(source.is_directed())
            })
        };
        tracing::debug!(
            nodes = view.node_count(),
            edges = view.edge_count(),
            filters = filters.len(),
            "recomputed filtered view"
        );
        *self.view.borrow_mut() = Rc::new(view);
    }
}

fn passes_all(node: &Node, filters: &[Predicate]) -> bool {
    filters.iter().all(|predicate| match predicate.apply(node) {
        Ok(passes) => passes,
        Err(error) => {
            tracing::debug!(node = %node.id(), %error, "predicate error, excluding node");
            false
        }
    })
}

impl ChangeObserver for ViewState {
    fn on_graph_change(&self, source: &Graph, event: &GraphEvent) -> anyhow::Result<()> {
        tracing::debug!(event = event.name(), "source graph changed");
        self.rebuild(source);
        Ok(())
    }
}

/// A named source graph with an always-up-to-date filtered view.
pub struct Workspace {
    name: String,
    source: Rc<RefCell<Graph>>,
    state: Rc<ViewState>,
}

impl Workspace {
    /// Create a workspace around the graph supplied by the plugin.
    ///
    /// The plugin is consulted exactly once; the workspace subscribes
    /// itself to the loaded graph and computes the initial view.
    pub fn new(name: impl Into<String>, plugin: &dyn DataSourcePlugin) -> WorkspaceResult<Self> {
        let name = name.into();
        let graph = plugin.load_graph().map_err(WorkspaceError::Plugin)?;
        tracing::debug!(
            workspace = %name,
            plugin = plugin.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded source graph"
        );

        let state = Rc::new(ViewState {
            filters: RefCell::new(Vec::new()),
            view: RefCell::new(Rc::new(Graph::new(graph.is_directed()))),
        });
        let source = Rc::new(RefCell::new(graph));
        {
            let mut graph = source.borrow_mut();
            let observer: Rc<dyn ChangeObserver> = state.clone();
            graph.attach(Rc::downgrade(&observer));
            state.rebuild(&graph);
        }

        Ok(Self {
            name,
            source,
            state,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle to the source graph. Mutations made through it notify the
    /// workspace and refresh the view inline.
    pub fn source(&self) -> Rc<RefCell<Graph>> {
        self.source.clone()
    }

    /// The current filtered view. The returned handle stays valid across
    /// later recomputes; it just stops reflecting them.
    pub fn view(&self) -> Rc<Graph> {
        self.state.view.borrow().clone()
    }

    /// Snapshot of the active predicates.
    pub fn filters(&self) -> Vec<Predicate> {
        self.state.filters.borrow().clone()
    }

    /// Add a predicate and recompute the view. Adding a predicate already
    /// present (by structural equality) is a no-op; returns whether the
    /// predicate was inserted.
    pub fn add_filter(&self, spec: impl Into<PredicateSpec>) -> WorkspaceResult<bool> {
        let predicate = spec.into().resolve()?;
        {
            let mut filters = self.state.filters.borrow_mut();
            if filters.contains(&predicate) {
                return Ok(false);
            }
            tracing::debug!(workspace = %self.name, %predicate, "adding predicate");
            filters.push(predicate);
        }
        self.state.rebuild(&self.source.borrow());
        Ok(true)
    }

    /// Remove a predicate and recompute the view. Removing a predicate
    /// that is not active is an error, not a no-op.
    pub fn remove_filter(&self, spec: impl Into<PredicateSpec>) -> WorkspaceResult<()> {
        let predicate = spec.into().resolve()?;
        {
            let mut filters = self.state.filters.borrow_mut();
            let position = filters
                .iter()
                .position(|p| p == &predicate)
                .ok_or_else(|| WorkspaceError::FilterNotFound(predicate.to_string()))?;
            tracing::debug!(workspace = %self.name, %predicate, "removing predicate");
            filters.remove(position);
        }
        self.state.rebuild(&self.source.borrow());
        Ok(())
    }

    /// Drop every active search predicate in one recompute. Returns how
    /// many were removed.
    pub fn clear_search(&self) -> usize {
        let removed = {
            let mut filters = self.state.filters.borrow_mut();
            let before = filters.len();
            filters.retain(|p| !p.is_search());
            before - filters.len()
        };
        if removed > 0 {
            tracing::debug!(workspace = %self.name, removed, "cleared search predicates");
            self.state.rebuild(&self.source.borrow());
        }
        removed
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("name", &self.name)
            .field("filters", &self.state.filters.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loupe_core::DataValue;
    use loupe_query::Operator;
    use std::collections::HashMap;

    /// Plugin producing the two-person graph used across these tests:
    /// nodes A (age 30) and B (age 20), edge A -> B.
    struct AgeGraphSource;

    impl DataSourcePlugin for AgeGraphSource {
        fn name(&self) -> &str {
            "ages"
        }

        fn load_graph(&self) -> anyhow::Result<Graph> {
            let mut graph = Graph::new(true);
            graph.add_node(Node::new(NodeId::new("A")?).with_attr("age", 30));
            graph.add_node(Node::new(NodeId::new("B")?).with_attr("age", 20));
            graph.add_edge(Edge::new(NodeId::new("A")?, NodeId::new("B")?));
            Ok(graph)
        }
    }

    fn id(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    #[test]
    fn test_initial_view_is_independent_copy() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        let view = workspace.view();

        assert_eq!(view.node_count(), 2);
        assert_eq!(view.edge_count(), 1);

        // Mutating the source must not leak into the view already handed out.
        workspace.source().borrow_mut().add_node(Node::new(id("C")));
        assert_eq!(view.node_count(), 2);
    }

    #[test]
    fn test_filter_excludes_nodes_and_dangling_edges() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        workspace
            .add_filter(Filter::new("age", Operator::Gt, 25))
            .unwrap();

        let view = workspace.view();
        assert_eq!(view.node_count(), 1);
        assert!(view.contains_node(&id("A")));
        // A -> B is excluded because B failed the filter.
        assert_eq!(view.edge_count(), 0);
    }

    #[test]
    fn test_textual_filter_expression() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        workspace.add_filter("age > 25").unwrap();

        assert_eq!(workspace.view().node_count(), 1);
        assert!(matches!(
            workspace.add_filter("age >"),
            Err(WorkspaceError::Query(_))
        ));
    }

    #[test]
    fn test_add_remove_round_trip() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        let before: Vec<NodeId> = {
            let view = workspace.view();
            let mut ids: Vec<NodeId> = view.nodes().map(|n| n.id().clone()).collect();
            ids.sort();
            ids
        };

        let filter = Filter::new("age", Operator::Gt, 25);
        workspace.add_filter(filter.clone()).unwrap();
        workspace.remove_filter(filter).unwrap();

        let after: Vec<NodeId> = {
            let view = workspace.view();
            let mut ids: Vec<NodeId> = view.nodes().map(|n| n.id().clone()).collect();
            ids.sort();
            ids
        };
        assert_eq!(before, after);
    }

    #[test]
    fn test_duplicate_filter_is_noop() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        let filter = Filter::new("age", Operator::Gt, 25);

        assert!(workspace.add_filter(filter.clone()).unwrap());
        assert!(!workspace.add_filter(filter).unwrap());
        assert_eq!(workspace.filters().len(), 1);
    }

    #[test]
    fn test_remove_missing_filter_is_an_error() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        let result = workspace.remove_filter(Filter::new("age", Operator::Gt, 25));
        assert!(matches!(result, Err(WorkspaceError::FilterNotFound(_))));
    }

    #[test]
    fn test_source_mutation_refreshes_view() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        workspace.add_filter("age > 25").unwrap();
        assert_eq!(workspace.view().node_count(), 1);

        workspace
            .source()
            .borrow_mut()
            .add_node(Node::new(id("C")).with_attr("age", 40));

        let view = workspace.view();
        assert_eq!(view.node_count(), 2);
        assert!(view.contains_node(&id("C")));
    }

    #[test]
    fn test_predicate_type_mismatch_is_absorbed() {
        struct MixedSource;
        impl DataSourcePlugin for MixedSource {
            fn name(&self) -> &str {
                "mixed"
            }
            fn load_graph(&self) -> anyhow::Result<Graph> {
                let mut graph = Graph::new(true);
                graph.add_node(Node::new(NodeId::new("A")?).with_attr("age", 3));
                graph.add_node(Node::new(NodeId::new("B")?).with_attr("age", "unknown"));
                Ok(graph)
            }
        }

        let workspace = Workspace::new("test", &MixedSource).unwrap();
        // B's string age raises a type mismatch internally; the recompute
        // still succeeds and simply excludes B.
        workspace.add_filter("age < 5").unwrap();

        let view = workspace.view();
        assert_eq!(view.node_count(), 1);
        assert!(view.contains_node(&id("A")));
    }

    #[test]
    fn test_search_predicate() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        workspace.add_filter(Search::new(30)).unwrap();

        let view = workspace.view();
        assert_eq!(view.node_count(), 1);
        assert!(view.contains_node(&id("A")));
    }

    #[test]
    fn test_clear_search_keeps_filters() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        workspace.add_filter(Search::new(30)).unwrap();
        workspace.add_filter(Search::new("age")).unwrap();
        workspace
            .add_filter(Filter::new("age", Operator::Le, 100))
            .unwrap();

        assert_eq!(workspace.clear_search(), 2);
        assert_eq!(workspace.filters().len(), 1);
        assert_eq!(workspace.view().node_count(), 2);
        // Nothing left to clear.
        assert_eq!(workspace.clear_search(), 0);
    }

    #[test]
    fn test_remove_node_failure_leaves_graph_and_view_intact() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();

        let result = workspace.source().borrow_mut().remove_node(&id("A"));
        assert!(result.is_err());

        let source = workspace.source();
        let graph = source.borrow();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.get_edge(&id("A"), &id("B")).is_some());
        drop(graph);

        let view = workspace.view();
        assert_eq!(view.node_count(), 2);
        assert_eq!(view.edge_count(), 1);
    }

    #[test]
    fn test_update_through_source_reapplies_filters() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        workspace.add_filter("age > 25").unwrap();
        assert_eq!(workspace.view().node_count(), 1);

        workspace
            .source()
            .borrow_mut()
            .update_node(
                &id("B"),
                HashMap::from([("age".to_string(), DataValue::Int(26))]),
            )
            .unwrap();

        let view = workspace.view();
        assert_eq!(view.node_count(), 2);
        // Both endpoints now survive, so the edge is back.
        assert_eq!(view.edge_count(), 1);
    }

    #[test]
    fn test_clear_source_empties_view() {
        let workspace = Workspace::new("test", &AgeGraphSource).unwrap();
        workspace.source().borrow_mut().clear();

        let view = workspace.view();
        assert_eq!(view.node_count(), 0);
        assert_eq!(view.edge_count(), 0);
    }
}
