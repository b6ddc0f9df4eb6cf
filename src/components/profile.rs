use yew::prelude::*;

use super::input_value;
use crate::hooks::{use_session, use_toasts};
use crate::utils::{format_date, password_checklist};
use crate::viewmodels::{PasswordForm, ProfileForm, ProfileViewModel};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let toasts = use_toasts();
    let form = use_state(ProfileForm::default);
    let passwords = use_state(PasswordForm::default);
    let changing_password = use_state(|| false);
    let vm = ProfileViewModel::new(session.client());

    let Some(user) = session.session.user.clone() else {
        return html! {};
    };

    let start_editing = {
        let form = form.clone();
        let user = user.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.start_editing(Some(&user));
            form.set(next);
        })
    };
    let cancel = {
        let form = form.clone();
        let user = user.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.cancel(Some(&user));
            form.set(next);
        })
    };

    let save = {
        let form = form.clone();
        let store = session.store.clone();
        let toasts = toasts.clone();
        let vm = vm.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.saving {
                return;
            }
            let mut pending = (*form).clone();
            pending.saving = true;
            form.set(pending.clone());

            let form = form.clone();
            let store = store.clone();
            let toasts = toasts.clone();
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.save_profile(&pending).await;
                if let Ok(identity) = &result {
                    store.update_user(identity.clone());
                }
                let feedback = pending.finish_save(&result);
                toasts.show(feedback);
                form.set(pending);
            });
        })
    };

    let change_password = {
        let passwords = passwords.clone();
        let changing_password = changing_password.clone();
        let toasts = toasts.clone();
        let vm = vm.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *changing_password {
                return;
            }
            changing_password.set(true);
            let values = (*passwords).clone();
            let passwords = passwords.clone();
            let changing_password = changing_password.clone();
            let toasts = toasts.clone();
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let feedback = vm.change_password(&values).await;
                if !feedback.is_error() {
                    passwords.set(PasswordForm::default());
                }
                toasts.show(feedback);
                changing_password.set(false);
            });
        })
    };

    let draft_input = |apply: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
        })
    };
    let password_input = |apply: fn(&mut PasswordForm, String)| {
        let passwords = passwords.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*passwords).clone();
            apply(&mut next, input_value(&e));
            passwords.set(next);
        })
    };

    html! {
        <section class="profile-page">
            <div class="card">
                <h3>{"Profile"}</h3>
                if form.editing {
                    <form class="profile-form" onsubmit={save}>
                        <div class="form-group">
                            <label>{"First name"}</label>
                            <input value={form.draft.first_name.clone()}
                                oninput={draft_input(|f, v| f.draft.first_name = v)} />
                        </div>
                        <div class="form-group">
                            <label>{"Last name"}</label>
                            <input value={form.draft.last_name.clone()}
                                oninput={draft_input(|f, v| f.draft.last_name = v)} />
                        </div>
                        <div class="form-group">
                            <label>{"Email"}</label>
                            <input type="email" value={form.draft.email.clone()}
                                oninput={draft_input(|f, v| f.draft.email = v)} />
                        </div>
                        <div class="form-actions">
                            <button type="submit" class="btn-primary" disabled={form.saving}>
                                { if form.saving { "Saving..." } else { "Save" } }
                            </button>
                            <button type="button" class="btn-secondary" onclick={cancel}>{"Cancel"}</button>
                        </div>
                    </form>
                } else {
                    <dl class="profile-details">
                        <dt>{"Name"}</dt><dd>{user.display_name()}</dd>
                        <dt>{"Email"}</dt><dd>{user.email.clone()}</dd>
                        <dt>{"Role"}</dt><dd>{user.role_label()}</dd>
                        <dt>{"Member since"}</dt><dd>{format_date(user.created_at.as_deref())}</dd>
                    </dl>
                    <button class="btn-primary" onclick={start_editing}>{"Edit profile"}</button>
                }
            </div>

            <div class="card">
                <h3>{"Change password"}</h3>
                <form class="password-form" onsubmit={change_password}>
                    <div class="form-group">
                        <label>{"Current password"}</label>
                        <input type="password" value={passwords.current_password.clone()}
                            oninput={password_input(|p, v| p.current_password = v)} />
                    </div>
                    <div class="form-group">
                        <label>{"New password"}</label>
                        <input type="password" value={passwords.new_password.clone()}
                            oninput={password_input(|p, v| p.new_password = v)} />
                        <ul class="password-checklist">
                            { for password_checklist(&passwords.new_password).into_iter().map(|(req, met)| html! {
                                <li class={if met { "requirement met" } else { "requirement" }}>
                                    { if met { "✓ " } else { "○ " } }{req.label()}
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="form-group">
                        <label>{"Confirm new password"}</label>
                        <input type="password" value={passwords.confirm_password.clone()}
                            oninput={password_input(|p, v| p.confirm_password = v)} />
                    </div>
                    <button type="submit" class="btn-primary" disabled={*changing_password}>
                        { if *changing_password { "Changing..." } else { "Change password" } }
                    </button>
                </form>
            </div>
        </section>
    }
}
