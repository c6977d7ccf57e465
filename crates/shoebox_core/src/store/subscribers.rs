//! Explicit subscribe/notify registry for presentation bindings.
//!
//! Presentation layers subscribe a callback and re-render when notified;
//! stores call `notify` after every mutation. This replaces the reactive
//! binding of the UI framework with a framework-free interface.

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback registry owned by each store.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    listeners: Vec<(u64, Box<dyn Fn()>)>,
}

impl Subscribers {
    /// Registers a callback invoked after every store mutation.
    pub fn subscribe(&mut self, listener: Box<dyn Fn()>) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        SubscriptionId(id)
    }

    /// Removes a previously registered callback; unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id.0);
    }

    /// Invokes every registered callback.
    pub fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener();
        }
    }
}
