// ============================================================================
// USE POLLING HOOK - Fetch on sign-in, then on a fixed interval
// ============================================================================
// Bookkeeping lives in `Poller`; this hook only wires it to the interval
// timer and to re-renders. Signing out drops the interval and deactivates
// the poller so late responses are discarded.
// ============================================================================

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::error::ApiError;
use crate::state::{poll_once, Poller};

pub type FetchFn<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, ApiError>>>;

pub struct UsePollingHandle<T> {
    pub data: T,
    pub error: Option<String>,
    pub loading: bool,
    pub refetch: Callback<()>,
}

#[hook]
pub fn use_polling<T>(authenticated: bool, period_ms: u32, fetch: FetchFn<T>) -> UsePollingHandle<T>
where
    T: Clone + Default + 'static,
{
    let poller = use_mut_ref(Poller::<T>::new);
    let latest_fetch = use_mut_ref(|| fetch.clone());
    *latest_fetch.borrow_mut() = fetch;
    let rerender = use_force_update();

    let run: Rc<dyn Fn()> = {
        let poller = poller.clone();
        let latest_fetch = latest_fetch.clone();
        let rerender = rerender.clone();
        Rc::new(move || {
            let poller = poller.clone();
            let fetch = latest_fetch.borrow().clone();
            let rerender = rerender.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if poll_once(&*poller, move || fetch()).await {
                    rerender.force_update();
                }
            });
        })
    };

    {
        let poller = poller.clone();
        let run = run.clone();
        let rerender = rerender.clone();
        use_effect_with((authenticated, period_ms), move |&(authenticated, period_ms)| {
            let mut interval = None;
            if authenticated {
                log::info!("⏰ Polling every {}", cadence_label(period_ms));
                poller.borrow_mut().activate();
                rerender.force_update();
                run();
                let tick = run.clone();
                interval = Some(Interval::new(period_ms, move || tick()));
            }

            move || {
                drop(interval);
                poller.borrow_mut().deactivate();
            }
        });
    }

    let snapshot = poller.borrow().snapshot();
    let refetch = Callback::from(move |_| run());

    UsePollingHandle {
        data: snapshot.data,
        error: snapshot.error,
        loading: snapshot.loading,
        refetch,
    }
}

fn cadence_label(period_ms: u32) -> String {
    if period_ms >= 1_000 && period_ms % 1_000 == 0 {
        format!("{} s", period_ms / 1_000)
    } else {
        format!("{} ms", period_ms)
    }
}
