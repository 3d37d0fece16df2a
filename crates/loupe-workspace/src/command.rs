//! Command dispatch - the operations a front-end issues against a workspace

use crate::error::WorkspaceResult;
use crate::workspace::Workspace;
use loupe_core::{DataValue, Edge, Node, NodeId};
use loupe_query::Search;
use std::collections::HashMap;

/// A single front-end command, addressed to one workspace.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a filter from a textual expression (`attribute operator value`).
    FilterGraph { expression: String },
    /// Add a search predicate from raw text.
    SearchGraph { term: String },
    /// Remove the filter described by a textual expression.
    RemoveFilter { expression: String },
    /// Drop all active search predicates.
    ClearSearch,
    CreateNode {
        id: String,
        data: HashMap<String, DataValue>,
    },
    CreateEdge {
        origin: String,
        target: String,
        data: HashMap<String, DataValue>,
    },
    DeleteNode { id: String },
    DeleteEdge { origin: String, target: String },
}

/// What a successfully executed command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    FilterAdded { inserted: bool },
    FilterRemoved,
    SearchAdded { inserted: bool },
    SearchCleared { removed: usize },
    NodeCreated { inserted: bool },
    EdgeCreated { inserted: bool },
    NodeDeleted,
    EdgeDeleted,
}

/// Execute a command against a workspace.
///
/// Graph mutations go through the workspace's source graph, so the filtered
/// view is refreshed before this returns. Errors from the underlying
/// operations propagate unchanged.
pub fn execute(workspace: &Workspace, command: Command) -> WorkspaceResult<CommandOutcome> {
    tracing::debug!(workspace = workspace.name(), ?command, "executing command");
    match command {
        Command::FilterGraph { expression } => {
            let inserted = workspace.add_filter(expression.as_str())?;
            Ok(CommandOutcome::FilterAdded { inserted })
        }
        Command::SearchGraph { term } => {
            let inserted = workspace.add_filter(Search::parse(&term))?;
            Ok(CommandOutcome::SearchAdded { inserted })
        }
        Command::RemoveFilter { expression } => {
            workspace.remove_filter(expression.as_str())?;
            Ok(CommandOutcome::FilterRemoved)
        }
        Command::ClearSearch => Ok(CommandOutcome::SearchCleared {
            removed: workspace.clear_search(),
        }),
        Command::CreateNode { id, data } => {
            let node = Node::new(NodeId::new(id)?).with_data(data);
            let inserted = workspace.source().borrow_mut().add_node(node);
            Ok(CommandOutcome::NodeCreated { inserted })
        }
        Command::CreateEdge {
            origin,
            target,
            data,
        } => {
            let edge = Edge::new(NodeId::new(origin)?, NodeId::new(target)?).with_data(data);
            let inserted = workspace.source().borrow_mut().add_edge(edge);
            Ok(CommandOutcome::EdgeCreated { inserted })
        }
        Command::DeleteNode { id } => {
            workspace.source().borrow_mut().remove_node(&NodeId::new(id)?)?;
            Ok(CommandOutcome::NodeDeleted)
        }
        Command::DeleteEdge { origin, target } => {
            workspace
                .source()
                .borrow_mut()
                .remove_edge(&NodeId::new(origin)?, &NodeId::new(target)?)?;
            Ok(CommandOutcome::EdgeDeleted)
        }
    }
}
