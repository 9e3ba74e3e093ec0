//! Typed change notifications
//!
//! The model publishes a [`ChangeEvent`] whenever one of its trees changes.
//! Each event carries a full snapshot of the tree, never a diff. Listeners
//! are plain closures; a [`SubscriptionId`] removes one again, either
//! explicitly or through the [`Scope`] it was registered with.

use crate::artifacts::core::scope::Scope;
use crate::artifacts::status::resource::Resource;
use log::trace;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Immutable snapshot of one tree.
pub type TreeSnapshot = Arc<[Resource]>;

type Listener = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Working,
    Staging,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: TreeKind,
    pub snapshot: TreeSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone, Default)]
pub struct ChangeNotifier {
    listeners: Arc<Mutex<BTreeMap<SubscriptionId, Listener>>>,
    next_id: Arc<AtomicU64>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners().insert(id, Arc::new(listener));
        trace!("Subscribed change listener {:?}", id);

        id
    }

    /// Subscribes and ties the subscription's lifetime to `scope`.
    pub fn subscribe_scoped<F>(&self, scope: &mut Scope, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        let id = self.subscribe(listener);
        let notifier = self.clone();
        scope.add(move || {
            notifier.unsubscribe(id);
        });

        id
    }

    /// Returns whether the subscription was still active.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.listeners().remove(&id).is_some();
        trace!("Unsubscribed change listener {:?}: {}", id, removed);

        removed
    }

    pub fn clear(&self) {
        self.listeners().clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    /// Calls every listener in subscription order.
    ///
    /// The listener table is not locked while listeners run, so a listener
    /// may subscribe or unsubscribe.
    pub fn emit(&self, kind: TreeKind, snapshot: TreeSnapshot) {
        let listeners = self.listeners().values().cloned().collect::<Vec<_>>();
        let event = ChangeEvent { kind, snapshot };
        trace!(
            "Emitting {:?} change with {} entries to {} listeners",
            event.kind,
            event.snapshot.len(),
            listeners.len()
        );

        for listener in listeners {
            listener(&event);
        }
    }

    fn listeners(&self) -> MutexGuard<'_, BTreeMap<SubscriptionId, Listener>> {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
