// ============================================================================
// REACTIVITY - Observable value with subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubscriptionId = u64;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Value plus observers. Subscribers receive a snapshot taken after each
/// mutation, so they may read or mutate the state again without a borrow
/// conflict.
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    next_id: Cell<SubscriptionId>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Applies `updater` as one mutation, then notifies
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self) {
        let snapshot = self.get();
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_every_update() {
        let state = ReactiveState::new(0u32);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        state.subscribe(move |v| sink.borrow_mut().push(*v));

        state.set(1);
        state.update(|v| *v += 5);

        assert_eq!(*seen.borrow(), vec![1, 6]);
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let state = ReactiveState::new(String::new());
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = state.subscribe(move |_| counter.set(counter.get() + 1));

        state.set("a".into());
        state.unsubscribe(id);
        state.set("b".into());

        assert_eq!(hits.get(), 1);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn callbacks_may_read_state_reentrantly() {
        let state = Rc::new(ReactiveState::new(1i32));
        let reader = Rc::downgrade(&state);
        let observed = Rc::new(Cell::new(0));
        let out = observed.clone();
        state.subscribe(move |_| {
            if let Some(state) = reader.upgrade() {
                out.set(state.get());
            }
        });

        state.set(42);
        assert_eq!(observed.get(), 42);
    }
}
