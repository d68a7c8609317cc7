//! Ordered change listeners for setting widgets

use std::fmt;
use std::sync::{Arc, Mutex};

/// Receives every committed change of a setting
pub trait ChangeListener<T>: Send + Sync {
    fn on_preference_change(&self, new_value: &T);
}

impl<T, F> ChangeListener<T> for F
where
    F: Fn(&T) + Send + Sync,
{
    fn on_preference_change(&self, new_value: &T) {
        self(new_value)
    }
}

/// Shared handle to a registered listener
pub type ListenerRef<T> = Arc<dyn ChangeListener<T>>;

/// Listeners notified in registration order
///
/// The same listener may be registered more than once and is then notified
/// once per registration. Clones share one list, so a listener can hold a
/// clone and remove itself.
///
/// Notification works on a snapshot taken when it starts: a listener removed
/// while a change is being delivered still receives that change and none
/// after it.
pub struct Listeners<T> {
    inner: Arc<Mutex<Vec<ListenerRef<T>>>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listeners {{ len: {} }}", self.len())
    }
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener at the end of the list
    pub fn add(&self, listener: ListenerRef<T>) {
        if let Ok(mut listeners) = self.inner.lock() {
            listeners.push(listener);
        }
    }

    /// Remove the first registration of `listener`
    ///
    /// Returns whether a registration was removed.
    pub fn remove(&self, listener: &ListenerRef<T>) -> bool {
        let Ok(mut listeners) = self.inner.lock() else {
            return false;
        };

        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `new_value` to every listener, in registration order
    pub fn notify(&self, new_value: &T) {
        let snapshot: Vec<ListenerRef<T>> = match self.inner.lock() {
            Ok(listeners) => listeners.clone(),
            Err(_) => return,
        };

        for listener in snapshot {
            listener.on_preference_change(new_value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> ListenerRef<i32> {
        let log = Arc::clone(log);
        Arc::new(move |value: &i32| {
            log.lock().unwrap().push(format!("{tag}:{value}"));
        })
    }

    #[test]
    fn notifies_in_registration_order_without_dedup() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let listeners = Listeners::new();
        let a = recorder(&log, "a");
        let b = recorder(&log, "b");

        listeners.add(a.clone());
        listeners.add(b);
        listeners.add(a);
        listeners.notify(&7);

        assert_eq!(*log.lock().unwrap(), vec!["a:7", "b:7", "a:7"]);
    }

    #[test]
    fn remove_drops_first_registration_only() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let listeners = Listeners::new();
        let a = recorder(&log, "a");

        listeners.add(a.clone());
        listeners.add(a.clone());
        assert!(listeners.remove(&a));
        assert_eq!(listeners.len(), 1);
        assert!(listeners.remove(&a));
        assert!(!listeners.remove(&a));
        assert!(listeners.is_empty());
    }

    #[test]
    fn removal_during_dispatch_applies_to_next_change() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let listeners: Listeners<i32> = Listeners::new();
        let slot: Arc<Mutex<Option<ListenerRef<i32>>>> = Arc::new(Mutex::new(None));

        let one_shot: ListenerRef<i32> = {
            let log = Arc::clone(&log);
            let listeners = listeners.clone();
            let slot = Arc::clone(&slot);
            Arc::new(move |value: &i32| {
                log.lock().unwrap().push(format!("once:{value}"));
                if let Some(me) = slot.lock().unwrap().take() {
                    listeners.remove(&me);
                }
            })
        };
        *slot.lock().unwrap() = Some(one_shot.clone());

        listeners.add(one_shot);
        listeners.add(recorder(&log, "after"));

        listeners.notify(&1);
        listeners.notify(&2);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["once:1", "after:1", "after:2"]
        );
    }
}
