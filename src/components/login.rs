use yew::prelude::*;
use yew_router::prelude::*;

use super::input_value;
use crate::hooks::{use_session, use_toasts};
use crate::routing::{post_login_route, LoginQuery, Route};
use crate::utils::{validate_login, APP_TITLE};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let toasts = use_toasts();
    let navigator = use_navigator();
    let from = use_location()
        .and_then(|l| l.query::<LoginQuery>().ok())
        .and_then(|q| q.from);

    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Already signed in: skip the form
    {
        let navigator = navigator.clone();
        let from = from.clone();
        let signed_in = !session.session.loading && session.session.is_authenticated();
        use_effect_with(signed_in, move |signed_in| {
            if *signed_in {
                if let Some(navigator) = navigator {
                    navigator.replace(&post_login_route(from.as_deref()));
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let store = session.store.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(e) = validate_login(&email, &password) {
                error.set(Some(e.to_string()));
                return;
            }

            let store = store.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let from = from.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let (email, password) = ((*email).clone(), (*password).clone());
            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = store.login(&email, &password).await;
                submitting.set(false);
                if outcome.success {
                    toasts.success("Login successful!");
                    if let Some(navigator) = navigator {
                        navigator.replace(&post_login_route(from.as_deref()));
                    }
                } else {
                    let message = outcome.message.unwrap_or_default();
                    toasts.error(message.clone());
                    error.set(Some(message));
                }
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(input_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{APP_TITLE}</h1>
                <p class="auth-subtitle">{"Sign in to your account"}</p>

                <form class="auth-form" {onsubmit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" placeholder="you@company.com"
                            value={(*email).clone()} oninput={on_email} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password"
                            value={(*password).clone()} oninput={on_password} />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class="form-error">{message}</p>
                    }

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>

                <Link<Route> to={Route::ForgotPassword} classes="auth-link">
                    {"Forgot your password?"}
                </Link<Route>>
            </div>
        </div>
    }
}
