//! Toast notification queue shared by every page and component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any part of the UI can enqueue a short-lived message through the hub, and
//! any number of display surfaces (normally a single `ToastHost`) stay in sync
//! by subscribing to it. The root `App` creates one hub and provides it as
//! context; clones share the same queue.
//!
//! DELIVERY
//! ========
//! Every mutation replaces the backing sequence with a new immutable value and
//! notifies listeners synchronously, before the mutating call returns. A
//! listener that mutates the hub re-entrantly has its notification appended
//! to the in-flight delivery, so each listener still sees sequences in
//! mutation order and exactly once.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS modifier used by the toast host.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastItem {
    /// Sequential id, never reused for the lifetime of the hub.
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

type Listener = Arc<dyn Fn(&[ToastItem]) + Send + Sync>;

struct Inner {
    last_id: u64,
    toasts: Arc<[ToastItem]>,
    last_listener_id: u64,
    listeners: Vec<(u64, Listener)>,
    pending: VecDeque<Arc<[ToastItem]>>,
    delivering: bool,
}

/// Process-wide toast queue with synchronous publish/subscribe.
#[derive(Clone)]
pub struct ToastHub {
    inner: Arc<Mutex<Inner>>,
}

impl Default for ToastHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToastHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("ToastHub")
            .field("toasts", &inner.toasts)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ToastHub {
    /// Create an empty hub whose first toast gets id `1`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                last_id: 0,
                toasts: Arc::from(Vec::new()),
                last_listener_id: 0,
                listeners: Vec::new(),
                pending: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    /// Enqueue a success toast and return its id.
    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    /// Enqueue an error toast and return its id.
    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    /// Enqueue an informational toast and return its id.
    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message.into())
    }

    /// Remove the toast with `id`. Unknown ids are ignored without notifying.
    pub fn remove(&self, id: u64) {
        let snapshot = {
            let mut inner = self.lock();
            if !inner.toasts.iter().any(|t| t.id == id) {
                return;
            }
            let next: Arc<[ToastItem]> = inner.toasts.iter().filter(|t| t.id != id).cloned().collect();
            inner.toasts = next.clone();
            next
        };
        self.publish(snapshot);
    }

    /// Register `listener` for every subsequent change.
    ///
    /// Each call creates an independent registration, even for the same
    /// closure; drop it with [`Subscription::unsubscribe`].
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[ToastItem]) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        inner.last_listener_id += 1;
        let id = inner.last_listener_id;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription { hub: Arc::downgrade(&self.inner), id }
    }

    /// Snapshot of the current queue in display order.
    pub fn toasts(&self) -> Arc<[ToastItem]> {
        self.lock().toasts.clone()
    }

    fn push(&self, kind: ToastKind, message: String) -> u64 {
        let (id, snapshot) = {
            let mut inner = self.lock();
            inner.last_id += 1;
            let id = inner.last_id;
            let next: Arc<[ToastItem]> = inner
                .toasts
                .iter()
                .cloned()
                .chain(std::iter::once(ToastItem { id, message, kind }))
                .collect();
            inner.toasts = next.clone();
            (id, next)
        };
        self.publish(snapshot);
        id
    }

    fn publish(&self, snapshot: Arc<[ToastItem]>) {
        {
            let mut inner = self.lock();
            inner.pending.push_back(snapshot);
            if inner.delivering {
                return;
            }
            inner.delivering = true;
        }

        let _delivery = DeliveryGuard(self);
        loop {
            let (snapshot, ids) = {
                let mut inner = self.lock();
                let Some(snapshot) = inner.pending.pop_front() else {
                    return;
                };
                let ids: Vec<u64> = inner.listeners.iter().map(|(id, _)| *id).collect();
                (snapshot, ids)
            };

            for id in ids {
                // Re-resolve per call so a listener removed mid-delivery is skipped.
                let listener = {
                    let inner = self.lock();
                    inner
                        .listeners
                        .iter()
                        .find(|(lid, _)| *lid == id)
                        .map(|(_, l)| l.clone())
                };
                if let Some(listener) = listener {
                    listener(&snapshot);
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Ends a delivery pass, even when a listener panics.
///
/// Snapshots still queued behind a panicking listener are dropped; the next
/// mutation publishes the latest state.
struct DeliveryGuard<'a>(&'a ToastHub);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.0.lock();
        inner.pending.clear();
        inner.delivering = false;
    }
}

/// Handle for one listener registration.
#[derive(Debug)]
pub struct Subscription {
    hub: Weak<Mutex<Inner>>,
    id: u64,
}

impl Subscription {
    /// Remove exactly this registration. No-op if the hub is gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.hub.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
