//! ChangeNotifier — fan-out of configuration-change events.
//!
//! Every business screen that renders an entity's fields, stages or list
//! columns subscribes here and invalidates its cached schema when the
//! `(module, entity)` it cares about changes. The notifier is an explicit,
//! injectable instance — construct one per process, clone the handle into
//! the session and into consumers — so tests get isolated notifiers instead
//! of an ambient singleton.
//!
//! Fan-out is synchronous and ordered by subscription order. There is no
//! replay: a subscriber only sees notifications emitted after it subscribed.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use tracing::warn;

type Callback = Arc<dyn Fn(&str, &str) + Send + Sync>;

struct Subscriber {
    id: u64,
    /// None subscribes to every key.
    filter: Option<(String, String)>,
    callback: Callback,
}

struct Inner {
    subscribers: Mutex<Vec<Subscriber>>,
    next_id: AtomicU64,
}

/// Cheaply cloneable handle to one notification channel.
#[derive(Clone)]
pub struct ChangeNotifier {
    inner: Arc<Inner>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Subscribe to every configuration change. Used by screens that want a
    /// crude refresh signal without per-entity awareness.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.register(None, Arc::new(callback))
    }

    /// Subscribe to changes of one `(module, entity)` key.
    pub fn subscribe_to<F>(&self, module: &str, entity: &str, callback: F) -> Subscription
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.register(
            Some((module.to_string(), entity.to_string())),
            Arc::new(callback),
        )
    }

    fn register(&self, filter: Option<(String, String)>, callback: Callback) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner.subscribers.lock().unwrap().push(Subscriber {
            id,
            filter,
            callback,
        });
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Fan a change event out to matching subscribers, in subscription
    /// order. Each callback runs isolated: one panicking subscriber is
    /// logged and skipped, the rest are still notified.
    pub fn notify(&self, module: &str, entity: &str) {
        // Snapshot under the lock, invoke outside it, so a callback may
        // subscribe or unsubscribe without deadlocking.
        let matching: Vec<Callback> = {
            let subscribers = self.inner.subscribers.lock().unwrap();
            subscribers
                .iter()
                .filter(|s| match &s.filter {
                    None => true,
                    Some((m, e)) => m == module && e == entity,
                })
                .map(|s| Arc::clone(&s.callback))
                .collect()
        };

        for callback in matching {
            if catch_unwind(AssertUnwindSafe(|| callback(module, entity))).is_err() {
                warn!(module = %module, entity = %entity, "config change subscriber panicked");
            }
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().unwrap().len()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Disposer returned by `subscribe`. Dropping it removes the subscription.
pub struct Subscription {
    inner: Weak<Inner>,
    id: u64,
}

impl Subscription {
    /// Remove the subscription now.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .subscribers
                .lock()
                .unwrap()
                .retain(|s| s.id != self.id);
        }
    }
}
