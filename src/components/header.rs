use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::hooks::use_notifications;
use crate::utils::{format_clock, format_date, APP_TITLE};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let now = use_state(Local::now);
    let panel_open = use_state(|| false);
    let notifications = use_notifications();

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let clock = Interval::new(1_000, move || now.set(Local::now()));
            move || drop(clock)
        });
    }

    let toggle_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |_: MouseEvent| panel_open.set(!*panel_open))
    };

    let count = notifications.data.len();
    let bell_class = if count > 0 { "bell ringing" } else { "bell" };

    html! {
        <header class="app-header">
            <div class="header-titles">
                <h1>{APP_TITLE}</h1>
                <h2>{props.title.clone()}</h2>
            </div>
            <div class="header-right">
                <span class="clock">{format_clock(*now)}</span>
                <button class={bell_class} onclick={toggle_panel}>
                    {"🔔"}
                    if count > 0 {
                        <span class="badge">{count.to_string()}</span>
                    }
                </button>
                if *panel_open {
                    <div class="notification-panel">
                        if let Some(error) = notifications.error.clone() {
                            <p class="form-error">{error}</p>
                        }
                        if notifications.data.is_empty() {
                            <p class="empty">{"No notifications"}</p>
                        }
                        { for notifications.data.iter().map(|n| html! {
                            <div class="notification">
                                <p>{n.message.clone()}</p>
                                <small>{format_date(n.created_at.as_deref())}</small>
                            </div>
                        }) }
                    </div>
                }
            </div>
        </header>
    }
}
