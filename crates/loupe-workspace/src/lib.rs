//! Loupe Workspace - filtered graph views kept consistent under mutation
//!
//! A [`Workspace`] loads a source graph from a [`DataSourcePlugin`],
//! subscribes to its changes, and maintains a cached view filtered by the
//! active predicate set. [`Command`] is the dispatch surface a front-end
//! uses to drive a workspace.

pub mod command;
pub mod error;
pub mod plugin;
pub mod workspace;

pub use command::{execute, Command, CommandOutcome};
pub use error::{WorkspaceError, WorkspaceResult};
pub use plugin::{DataSourcePlugin, GraphRenderer};
pub use workspace::{PredicateSpec, Workspace};
