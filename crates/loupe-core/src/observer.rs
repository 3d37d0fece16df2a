//! Change-notification fan-out for graphs

use crate::event::GraphEvent;
use crate::graph::Graph;
use std::rc::Weak;

/// Receiver of graph change notifications.
///
/// Callbacks run synchronously, inline with the mutation that triggered
/// them. A returned error is logged by the notifying graph and never
/// reaches the mutating caller or the remaining observers.
pub trait ChangeObserver {
    fn on_graph_change(&self, source: &Graph, event: &GraphEvent) -> anyhow::Result<()>;
}

/// Non-owning handle to an observer.
pub type ObserverHandle = Weak<dyn ChangeObserver>;

/// Set of subscribed observers, deduplicated by pointer identity.
///
/// The registry never owns its observers; a dropped observer is simply
/// skipped at notification time.
#[derive(Default, Clone)]
pub struct ObserverRegistry {
    observers: Vec<ObserverHandle>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer. Returns false if the same observer (by pointer
    /// identity) is already attached.
    pub fn attach(&mut self, observer: ObserverHandle) -> bool {
        if self.observers.iter().any(|o| o.ptr_eq(&observer)) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Detach an observer. Returns false if it was not attached.
    pub fn detach(&mut self, observer: &ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !o.ptr_eq(observer));
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Notify every live observer of an event.
    ///
    /// Iterates a snapshot of the current set, so the set cannot be
    /// corrupted by subscription changes made while a notification is in
    /// flight. Observer errors are logged and isolated; no ordering among
    /// observers is guaranteed.
    pub fn notify(&self, source: &Graph, event: &GraphEvent) {
        let snapshot = self.observers.clone();
        for handle in snapshot {
            let Some(observer) = handle.upgrade() else {
                continue;
            };
            if let Err(error) = observer.on_graph_change(source, event) {
                tracing::warn!(event = event.name(), %error, "observer failed during notification");
            }
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
