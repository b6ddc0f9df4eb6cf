// One-shot loads started from an effect. The effect cleanup cancels the
// guard so a response that lands after the inputs changed is not applied.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    cancelled: Rc<Cell<bool>>,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_current(&self) -> bool {
        !self.cancelled.get()
    }

    /// Runs `apply` only while the guard has not been cancelled
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current() {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;

    #[test]
    fn cancelled_load_is_not_applied() {
        let guard = LoadGuard::new();
        let seen = RefCell::new(None);
        guard.clone().cancel();
        assert!(!guard.apply("stale", |v| *seen.borrow_mut() = Some(v)));
        assert_eq!(*seen.borrow(), None);
    }

    #[test]
    fn slow_older_query_cannot_overwrite_newer_result() {
        let shown = RefCell::new(Vec::<&str>::new());
        let (old_tx, old_rx) = oneshot::channel::<&str>();

        let old_guard = LoadGuard::new();
        let old_load = {
            let guard = old_guard.clone();
            let shown = &shown;
            async move {
                let rows = old_rx.await.unwrap_or_default();
                guard.apply(rows, |rows| shown.borrow_mut().push(rows));
            }
        };

        // Inputs change: cleanup cancels the old load, a new one finishes first
        let newer = async {
            old_guard.cancel();
            let new_guard = LoadGuard::new();
            new_guard.apply("lee", |rows| shown.borrow_mut().push(rows));
            let _ = old_tx.send("l");
        };

        block_on(join(old_load, newer));
        assert_eq!(*shown.borrow(), vec!["lee"]);
    }
}
