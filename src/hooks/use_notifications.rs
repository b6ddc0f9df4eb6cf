use std::rc::Rc;

use futures::FutureExt;
use yew::prelude::*;

use super::{use_polling, use_session, FetchFn, UsePollingHandle};
use crate::config::CONFIG;
use crate::models::Notification;

/// Inventory notifications for the header bell, refreshed while signed in
#[hook]
pub fn use_notifications() -> UsePollingHandle<Vec<Notification>> {
    let session = use_session();
    let client = session.client();
    let fetch: FetchFn<Vec<Notification>> = Rc::new(move || {
        let client = client.clone();
        async move { client.fetch_notifications().await }.boxed_local()
    });
    use_polling(session.session.is_authenticated(), CONFIG.poll_interval_ms, fetch)
}
