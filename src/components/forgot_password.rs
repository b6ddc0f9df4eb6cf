use yew::prelude::*;
use yew_router::prelude::*;

use super::input_value;
use crate::hooks::{use_session, use_toasts};
use crate::routing::Route;
use crate::viewmodels::{ForgotPasswordOutcome, RecoveryViewModel};

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let session = use_session();
    let toasts = use_toasts();
    let email = use_state(String::new);
    let field_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let sent = use_state(|| None::<ForgotPasswordOutcome>);

    let onsubmit = {
        let vm = RecoveryViewModel::new(session.client());
        let email = email.clone();
        let field_error = field_error.clone();
        let submitting = submitting.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let vm = vm.clone();
            let toasts = toasts.clone();
            let address = (*email).clone();
            let field_error = field_error.clone();
            let submitting = submitting.clone();
            let sent = sent.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match vm.request_reset(&address).await {
                    Err(invalid) => field_error.set(Some(invalid.to_string())),
                    Ok(outcome) => {
                        toasts.show(outcome.feedback());
                        field_error.set(outcome.field_error().map(str::to_string));
                        if matches!(outcome, ForgotPasswordOutcome::Sent { .. }) {
                            sent.set(Some(outcome));
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_email = {
        let email = email.clone();
        let field_error = field_error.clone();
        Callback::from(move |e: InputEvent| {
            email.set(input_value(&e));
            field_error.set(None);
        })
    };

    if let Some(ForgotPasswordOutcome::Sent { email, admin_name, .. }) = (*sent).clone() {
        return html! {
            <div class="auth-screen">
                <div class="auth-card">
                    <h1>{"Check your email"}</h1>
                    if let Some(name) = admin_name {
                        <p>{format!("Admin account confirmed: {}", name)}</p>
                    }
                    <p>{format!("A password reset link has been sent to {}.", email)}</p>
                    <Link<Route> to={Route::Login} classes="auth-link">{"Back to sign in"}</Link<Route>>
                </div>
            </div>
        };
    }

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{"Forgot password"}</h1>
                <p class="auth-subtitle">{"Enter the email of your administrator account."}</p>
                <form class="auth-form" {onsubmit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" value={(*email).clone()} oninput={on_email} />
                        if let Some(message) = (*field_error).clone() {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Sending..." } else { "Send reset link" } }
                    </button>
                </form>
                <Link<Route> to={Route::Login} classes="auth-link">{"Back to sign in"}</Link<Route>>
            </div>
        </div>
    }
}
