use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_session, use_toasts};
use crate::routing::Route;

#[function_component(LogoutButton)]
pub fn logout_button() -> Html {
    let session = use_session();
    let toasts = use_toasts();
    let navigator = use_navigator();
    let busy = use_state(|| false);

    let onclick = {
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            if *busy {
                return;
            }
            busy.set(true);
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            session.logout(Callback::from(move |_| {
                busy.set(false);
                toasts.success("Logged out successfully");
                if let Some(navigator) = &navigator {
                    navigator.replace(&Route::Login);
                }
            }));
        })
    };

    html! {
        <button class="btn-logout" {onclick} disabled={*busy}>
            { if *busy { "Logging out..." } else { "Logout" } }
        </button>
    }
}
