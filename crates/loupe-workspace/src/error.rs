//! Error types for Loupe Workspace

use thiserror::Error;

/// Result type alias using the workspace error
pub type WorkspaceResult<T> = std::result::Result<T, WorkspaceError>;

/// Workspace error types
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Filter not found in workspace: {0}")]
    FilterNotFound(String),

    #[error(transparent)]
    Graph(#[from] loupe_core::Error),

    #[error(transparent)]
    Query(#[from] loupe_query::QueryError),

    #[error("Data source plugin failed: {0}")]
    Plugin(#[source] anyhow::Error),
}
