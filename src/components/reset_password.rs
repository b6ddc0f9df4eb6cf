use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use super::input_value;
use crate::hooks::{use_session, use_toasts};
use crate::routing::Route;
use crate::viewmodels::{RecoveryViewModel, ResetPasswordForm};

/// `/reset-password?token=..&email=..` as sent in the reset email
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
struct ResetLink {
    #[serde(default)]
    token: String,
    #[serde(default)]
    email: String,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let session = use_session();
    let toasts = use_toasts();
    let navigator = use_navigator();
    let link = use_location()
        .and_then(|l| l.query::<ResetLink>().ok())
        .unwrap_or_default();

    let form = use_state(|| ResetPasswordForm {
        email: link.email.clone(),
        token: link.token.clone(),
        ..Default::default()
    });
    let submitting = use_state(|| false);

    let onsubmit = {
        let vm = RecoveryViewModel::new(session.client());
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let vm = vm.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let values = (*form).clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let feedback = vm.reset_password(&values).await;
                submitting.set(false);
                let done = !feedback.is_error();
                toasts.show(feedback);
                if done {
                    if let Some(navigator) = navigator {
                        navigator.replace(&Route::Login);
                    }
                }
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.password = input_value(&e);
            form.set(next);
        })
    };
    let on_confirm = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.confirm_password = input_value(&e);
            form.set(next);
        })
    };

    let link_missing = link.token.is_empty() || link.email.is_empty();

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{"Reset password"}</h1>
                if link_missing {
                    <p class="form-error">{"This reset link is invalid or incomplete."}</p>
                    <Link<Route> to={Route::ForgotPassword} classes="auth-link">{"Request a new link"}</Link<Route>>
                } else {
                    <p class="auth-subtitle">{format!("Choose a new password for {}", link.email)}</p>
                    <form class="auth-form" {onsubmit}>
                        <div class="form-group">
                            <label for="password">{"New password"}</label>
                            <input id="password" type="password" value={form.password.clone()} oninput={on_password} />
                        </div>
                        <div class="form-group">
                            <label for="confirm">{"Confirm password"}</label>
                            <input id="confirm" type="password" value={form.confirm_password.clone()} oninput={on_confirm} />
                        </div>
                        <button type="submit" class="btn-primary" disabled={*submitting}>
                            { if *submitting { "Resetting..." } else { "Reset password" } }
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
