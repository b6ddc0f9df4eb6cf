use std::rc::Rc;

use futures::FutureExt;
use yew::prelude::*;

use super::{use_polling, use_session, FetchFn, UsePollingHandle};
use crate::config::CONFIG;
use crate::models::DamagesSnapshot;

/// Damage counters and records, refreshed while signed in
#[hook]
pub fn use_damages() -> UsePollingHandle<DamagesSnapshot> {
    let session = use_session();
    let client = session.client();
    let fetch: FetchFn<DamagesSnapshot> = Rc::new(move || {
        let client = client.clone();
        async move { client.fetch_damages().await }.boxed_local()
    });
    use_polling(session.session.is_authenticated(), CONFIG.poll_interval_ms, fetch)
}
