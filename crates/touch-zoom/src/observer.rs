//! Camera change observers

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::math::Camera;

/// Payload delivered to observers on every camera change
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraChange {
    /// Camera after the change
    pub camera: Camera,
    /// `true` for user gestures, `false` for programmatic transitions
    pub manual: bool,
}

type Callback = Rc<RefCell<dyn FnMut(&CameraChange)>>;

struct Entry {
    id: u64,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
    /// Changes raised while a pass is running, delivered after it
    pending: VecDeque<CameraChange>,
    dispatching: bool,
}

/// Set of camera-change callbacks.
///
/// Notification iterates a snapshot taken when the pass starts, so
/// callbacks can subscribe or unsubscribe (themselves or others) while it
/// runs. Changes take effect from the next pass.
///
/// A callback that moves the camera again does not recurse: the new change
/// is queued and delivered to every callback once the current pass ends.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&CameraChange) + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            callback: Rc::new(RefCell::new(callback)),
        });
        Subscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver a change to every callback, in registration order
    pub fn notify(&self, change: &CameraChange) {
        {
            let mut registry = self.inner.borrow_mut();
            registry.pending.push_back(*change);
            if registry.dispatching {
                return;
            }
            registry.dispatching = true;
        }

        loop {
            let next = {
                let mut registry = self.inner.borrow_mut();
                let next = registry.pending.pop_front();
                if next.is_none() {
                    registry.dispatching = false;
                }
                next
            };
            let Some(change) = next else { break };

            let snapshot: Vec<Callback> = self
                .inner
                .borrow()
                .entries
                .iter()
                .map(|entry| Rc::clone(&entry.callback))
                .collect();
            for callback in snapshot {
                (*callback.borrow_mut())(&change);
            }
        }
    }

    /// Remove every callback
    pub fn clear(&self) {
        let mut registry = self.inner.borrow_mut();
        registry.entries.clear();
        registry.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle returned by [`ObserverRegistry::subscribe`].
///
/// Dropping the handle keeps the callback registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Subscription {
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Remove the callback. A no-op if the registry is gone or cleared.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|entry| entry.id != self.id);
        }
    }
}
