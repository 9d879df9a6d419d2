use super::RtmEvent;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Weak};
use tokio::sync::RwLock;
use uuid::Uuid;

pub type Callback = Arc<dyn Fn(Value) + Send + Sync + 'static>;

struct Listener {
    id: Uuid,
    callback: Callback,
}

/// Listeners per normalized event, each list in registration order
#[derive(Default)]
struct Registry {
    listeners: HashMap<RtmEvent, Vec<Listener>>,

    /// Listeners owned by the engine, in registration order. Entries leave
    /// this list whenever their listener is removed, however that happens.
    tracked: Vec<Uuid>,
}

impl Registry {
    fn insert(&mut self, event: RtmEvent, callback: Callback, tracked: bool) -> Uuid {
        let id = Uuid::new_v4();
        self.listeners
            .entry(event)
            .or_default()
            .push(Listener { id, callback });
        if tracked {
            self.tracked.push(id);
        }
        id
    }

    fn remove(&mut self, event: &RtmEvent, id: Uuid) -> bool {
        let Some(listeners) = self.listeners.get_mut(event) else {
            return false;
        };

        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        let removed = listeners.len() != before;

        if listeners.is_empty() {
            self.listeners.remove(event);
        }
        if removed {
            self.tracked.retain(|tracked| *tracked != id);
        }
        removed
    }
}

/// Typed event registry shared by the engine and its emitter.
///
/// Events are keyed by [`RtmEvent::normalized`], so `Custom("tokenExpired")`
/// and `TokenExpired` address the same listeners, matching the single
/// `ag_rtm_tokenExpired` channel they both name.
#[derive(Clone, Default)]
pub struct EventRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback and return the handle that revokes it
    pub async fn add_listener(&self, event: RtmEvent, callback: Callback) -> Subscription {
        self.register(event, callback, false).await
    }

    /// Register a callback that [`remove_tracked`](Self::remove_tracked) also removes
    pub(crate) async fn add_tracked_listener(
        &self,
        event: RtmEvent,
        callback: Callback,
    ) -> Subscription {
        self.register(event, callback, true).await
    }

    async fn register(&self, event: RtmEvent, callback: Callback, tracked: bool) -> Subscription {
        let event = event.normalized();
        let id = self
            .inner
            .write()
            .await
            .insert(event.clone(), callback, tracked);

        tracing::debug!("Registered listener {} on {}", id, event.channel_name());

        Subscription {
            id,
            event,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Invoke every listener of `event` with `payload`, returning how many ran
    pub async fn dispatch(&self, event: &RtmEvent, payload: Value) -> usize {
        let event = event.normalized();
        let callbacks: Vec<Callback> = {
            let registry = self.inner.read().await;
            match registry.listeners.get(&event) {
                Some(listeners) => listeners.iter().map(|l| Arc::clone(&l.callback)).collect(),
                None => Vec::new(),
            }
        }; // Lock released here so callbacks may touch the registry

        tracing::debug!(
            "Dispatching {} to {} listener(s)",
            event.channel_name(),
            callbacks.len()
        );

        for callback in &callbacks {
            callback(payload.clone());
        }
        callbacks.len()
    }

    pub async fn listener_count(&self, event: &RtmEvent) -> usize {
        self.inner
            .read()
            .await
            .listeners
            .get(&event.normalized())
            .map_or(0, Vec::len)
    }

    /// Number of tracked listeners still registered
    pub(crate) async fn tracked_count(&self) -> usize {
        self.inner.read().await.tracked.len()
    }

    /// Remove every tracked listener, returning how many were removed
    pub(crate) async fn remove_tracked(&self) -> usize {
        let mut registry = self.inner.write().await;
        let tracked: HashSet<Uuid> = std::mem::take(&mut registry.tracked).into_iter().collect();
        if tracked.is_empty() {
            return 0;
        }

        registry.listeners.retain(|_, listeners| {
            listeners.retain(|l| !tracked.contains(&l.id));
            !listeners.is_empty()
        });
        tracked.len()
    }
}

/// Handle to one listener registration.
///
/// Clones refer to the same registration. Removing it more than once, or after
/// the engine is gone, is a no-op.
#[derive(Clone)]
pub struct Subscription {
    id: Uuid,
    event: RtmEvent,
    registry: Weak<RwLock<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Event this listener is registered on, in normalized form
    pub fn event(&self) -> &RtmEvent {
        &self.event
    }

    /// Unregister the listener. Returns `true` if it was still registered.
    pub async fn remove(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };

        let removed = registry.write().await.remove(&self.event, self.id);
        if removed {
            tracing::debug!(
                "Removed listener {} from {}",
                self.id,
                self.event.channel_name()
            );
        }
        removed
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event", &self.event)
            .finish()
    }
}
