// ============================================================================
// POLL STATE - Fetch-and-replace bookkeeping for polled collections
// ============================================================================
// One fetch in flight at a time. Each activation gets a new generation;
// results from an older generation are dropped instead of applied.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct PollSnapshot<T> {
    pub data: T,
    pub error: Option<String>,
    /// Active and nothing has arrived yet
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug)]
pub struct Poller<T> {
    data: T,
    error: Option<String>,
    loaded: bool,
    active: bool,
    in_flight: bool,
    generation: u64,
}

impl<T: Clone + Default> Default for Poller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Poller<T> {
    pub fn new() -> Self {
        Self {
            data: T::default(),
            error: None,
            loaded: false,
            active: false,
            in_flight: false,
            generation: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.generation += 1;
        }
    }

    /// Stops accepting results. Whatever is still in flight becomes stale.
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.in_flight = false;
            self.generation += 1;
        }
    }

    /// `None` while inactive or while another fetch is pending
    pub fn begin(&mut self) -> Option<FetchTicket> {
        if !self.active || self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(FetchTicket { generation: self.generation })
    }

    /// Applies a finished fetch. Returns false when the ticket is stale.
    /// A failure keeps the previous data and records the error.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.loaded = true;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    pub fn snapshot(&self) -> PollSnapshot<T> {
        PollSnapshot {
            data: self.data.clone(),
            error: self.error.clone(),
            loading: self.active && !self.loaded,
        }
    }
}

/// Runs one fetch through `poller`. `fetch` is not called at all when the
/// poller refuses a ticket. Returns true when the snapshot changed.
pub async fn poll_once<T, F, Fut>(poller: &RefCell<Poller<T>>, fetch: F) -> bool
where
    T: Clone + Default,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let ticket = poller.borrow_mut().begin();
    let Some(ticket) = ticket else {
        return false;
    };
    let result = fetch().await;
    poller.borrow_mut().complete(ticket, result)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use futures::executor::block_on;

    fn items(values: &[u32]) -> Result<Vec<u32>, ApiError> {
        Ok(values.to_vec())
    }

    #[test]
    fn inactive_poller_never_fetches_or_changes() {
        let poller = RefCell::new(Poller::<Vec<u32>>::new());
        let before = poller.borrow().snapshot();
        let calls = Cell::new(0);

        let changed = block_on(poll_once(&poller, || {
            calls.set(calls.get() + 1);
            async { items(&[1]) }
        }));

        assert!(!changed);
        assert_eq!(calls.get(), 0);
        assert_eq!(poller.borrow().snapshot(), before);
        assert!(!before.loading);
    }

    #[test]
    fn successful_fetch_replaces_snapshot_wholesale() {
        let poller = RefCell::new(Poller::<Vec<u32>>::new());
        poller.borrow_mut().activate();
        assert!(poller.borrow().snapshot().loading);

        assert!(block_on(poll_once(&poller, || async { items(&[1, 2, 3]) })));
        assert!(block_on(poll_once(&poller, || async { items(&[9]) })));

        let snapshot = poller.borrow().snapshot();
        assert_eq!(snapshot.data, vec![9]);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error, None);
    }

    #[test]
    fn failure_keeps_data_and_next_success_clears_error() {
        let poller = RefCell::new(Poller::<Vec<u32>>::new());
        poller.borrow_mut().activate();
        block_on(poll_once(&poller, || async { items(&[4]) }));

        block_on(poll_once(&poller, || async {
            Err(ApiError::Status { status: 503, message: "Service Unavailable".into() })
        }));
        let snapshot = poller.borrow().snapshot();
        assert_eq!(snapshot.data, vec![4]);
        assert_eq!(snapshot.error.as_deref(), Some("HTTP 503: Service Unavailable"));

        block_on(poll_once(&poller, || async { items(&[5]) }));
        assert_eq!(poller.borrow().snapshot().error, None);
    }

    #[test]
    fn overlapping_tick_is_skipped_while_in_flight() {
        let mut poller = Poller::<Vec<u32>>::new();
        poller.activate();

        let first = poller.begin();
        assert!(first.is_some());
        assert!(poller.is_in_flight());
        assert_eq!(poller.begin(), None);

        assert!(poller.complete(first.unwrap(), items(&[1])));
        assert!(poller.begin().is_some());
    }

    #[test]
    fn results_from_a_previous_activation_are_discarded() {
        let mut poller = Poller::<Vec<u32>>::new();
        poller.activate();
        let stale = poller.begin().unwrap();

        // Signed out and back in while the request was outstanding
        poller.deactivate();
        poller.activate();
        let fresh = poller.begin().unwrap();

        assert!(!poller.complete(stale, items(&[666])));
        assert!(poller.is_in_flight());
        assert!(poller.complete(fresh, items(&[7])));
        assert_eq!(poller.snapshot().data, vec![7]);
    }

    #[test]
    fn deactivated_poller_ignores_late_result() {
        let mut poller = Poller::<Vec<u32>>::new();
        poller.activate();
        let ticket = poller.begin().unwrap();
        poller.deactivate();

        assert!(!poller.complete(ticket, items(&[1])));
        assert_eq!(poller.snapshot().data, Vec::<u32>::new());
        assert!(!poller.is_active());
    }
}
