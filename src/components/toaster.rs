use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_toasts;
use crate::state::{Toast, ToastKind};

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let toasts = use_toasts();
    html! {
        <div class="toaster">
            { for toasts.toasts.iter().cloned().map(|toast| html! { <ToastItem key={toast.id} toast={toast.clone()} /> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toasts = use_toasts();
    let id = props.toast.id;

    {
        let store = toasts.store.clone();
        use_effect_with(id, move |&id| {
            let timer = Timeout::new(CONFIG.toast_duration_ms, move || store.dismiss(id));
            move || drop(timer)
        });
    }

    let class = match props.toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };
    let onclick = Callback::from(move |_: MouseEvent| toasts.dismiss(id));

    html! {
        <div {class} {onclick}>{props.toast.message.clone()}</div>
    }
}
