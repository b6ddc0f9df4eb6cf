// ============================================================================
// USER MANAGEMENT - Administrators only
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use super::{input_value, spinner};
use crate::hooks::{use_session, use_toasts};
use crate::models::{DashboardStats, ManagedUser, UsersPage};
use crate::state::LoadGuard;
use crate::utils::format_date;
use crate::viewmodels::{Feedback, NewUserForm, UsersViewModel};

#[function_component(UserManagementPage)]
pub fn user_management_page() -> Html {
    let session = use_session();
    let toasts = use_toasts();
    let vm = use_memo((), {
        let client = session.client();
        move |_| UsersViewModel::new(client)
    });

    let page = use_state(|| 1u32);
    let search = use_state(String::new);
    let reload = use_state(|| 0u32);
    let listing = use_state(|| None::<Result<UsersPage, String>>);
    let stats = use_state(|| None::<DashboardStats>);
    let new_user = use_state(NewUserForm::default);
    let show_create = use_state(|| false);

    {
        let vm = vm.clone();
        let listing = listing.clone();
        use_effect_with(((*page), (*search).clone(), *reload), move |(page, search, _)| {
            let (page, search) = (*page, search.clone());
            let guard = LoadGuard::new();
            {
                let guard = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = vm.load(page, &search).await;
                    if !guard.apply(loaded, |loaded| listing.set(Some(loaded))) {
                        log::debug!("🔄 Dropped stale user list for '{}'", search);
                    }
                });
            }
            move || guard.cancel()
        });
    }

    // Counters change only after an action, not while searching
    {
        let vm = vm.clone();
        let stats = stats.clone();
        use_effect_with(*reload, move |_| {
            let guard = LoadGuard::new();
            {
                let guard = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = vm.stats().await;
                    guard.apply(loaded, |loaded| stats.set(loaded));
                });
            }
            move || guard.cancel()
        });
    }

    // Runs an action, shows its feedback and reloads the table on success
    let run_action = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Rc::new(move |action: std::pin::Pin<Box<dyn std::future::Future<Output = Feedback>>>| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let feedback = action.await;
                let ok = !feedback.is_error();
                toasts.show(feedback);
                if ok {
                    reload.set(*reload + 1);
                }
            });
        })
    };

    let on_search = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            search.set(input_value(&e));
            page.set(1);
        })
    };

    let row = |user: &ManagedUser| {
        let is_self = is_same_account(session.session.user.as_ref(), user);
        let active = user.is_active.unwrap_or(true);

        let toggle_admin = {
            let (vm, run, user) = (vm.clone(), run_action.clone(), user.clone());
            Callback::from(move |_: MouseEvent| {
                let (vm, user) = (vm.clone(), user.clone());
                run(Box::pin(async move { vm.set_admin(&user, !user.is_admin).await }));
            })
        };
        let toggle_active = {
            let (vm, run, user) = (vm.clone(), run_action.clone(), user.clone());
            Callback::from(move |_: MouseEvent| {
                let (vm, user) = (vm.clone(), user.clone());
                run(Box::pin(async move { vm.set_active(&user, !active).await }));
            })
        };
        let delete = {
            let (vm, run, user) = (vm.clone(), run_action.clone(), user.clone());
            Callback::from(move |_: MouseEvent| {
                let (vm, user) = (vm.clone(), user.clone());
                run(Box::pin(async move { vm.delete(&user).await }));
            })
        };
        let send_reset = {
            let (vm, run, user) = (vm.clone(), run_action.clone(), user.clone());
            Callback::from(move |_: MouseEvent| {
                let (vm, user) = (vm.clone(), user.clone());
                run(Box::pin(async move { vm.send_reset_link(&user).await }));
            })
        };

        html! {
            <tr key={user.email.clone()}>
                <td>{user.display_name()}</td>
                <td>{user.email.clone()}</td>
                <td>{user.role_label()}</td>
                <td>{ if active { "Active" } else { "Inactive" } }</td>
                <td>{format_date(user.created_at.as_deref())}</td>
                <td class="row-actions">
                    <button onclick={send_reset}>{"Send reset link"}</button>
                    if !is_self {
                        <button onclick={toggle_admin}>
                            { if user.is_admin { "Revoke admin" } else { "Make admin" } }
                        </button>
                        <button onclick={toggle_active}>
                            { if active { "Deactivate" } else { "Activate" } }
                        </button>
                        <button class="danger" onclick={delete}>{"Delete"}</button>
                    }
                </td>
            </tr>
        }
    };

    let create_form = {
        let form_state = new_user.clone();
        let input = |apply: fn(&mut NewUserForm, String)| {
            let form_state = form_state.clone();
            Callback::from(move |e: InputEvent| {
                let mut next = (*form_state).clone();
                apply(&mut next, input_value(&e));
                form_state.set(next);
            })
        };
        let toggle_is_admin = {
            let form_state = form_state.clone();
            Callback::from(move |_: Event| {
                let mut next = (*form_state).clone();
                next.is_admin = !next.is_admin;
                form_state.set(next);
            })
        };
        let onsubmit = {
            let (vm, run, form_state, show_create) =
                (vm.clone(), run_action.clone(), form_state.clone(), show_create.clone());
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                if let Err(invalid) = form_state.validate() {
                    toasts.error(invalid.to_string());
                    return;
                }
                let (vm, values) = (vm.clone(), (*form_state).clone());
                form_state.set(NewUserForm::default());
                show_create.set(false);
                run(Box::pin(async move { vm.create(&values).await }));
            })
        };

        html! {
            <form class="create-user-form" {onsubmit}>
                <input placeholder="First name" value={form_state.first_name.clone()}
                    oninput={input(|f, v| f.first_name = v)} />
                <input placeholder="Last name" value={form_state.last_name.clone()}
                    oninput={input(|f, v| f.last_name = v)} />
                <input type="email" placeholder="Email" value={form_state.email.clone()}
                    oninput={input(|f, v| f.email = v)} />
                <input type="password" placeholder="Password" value={form_state.password.clone()}
                    oninput={input(|f, v| f.password = v)} />
                <label>
                    <input type="checkbox" checked={form_state.is_admin} onchange={toggle_is_admin} />
                    {"Administrator"}
                </label>
                <button type="submit" class="btn-primary">{"Create user"}</button>
            </form>
        }
    };

    let toggle_create = {
        let show_create = show_create.clone();
        Callback::from(move |_: MouseEvent| show_create.set(!*show_create))
    };
    let go_to = |target: u32| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(target))
    };

    let table = match &*listing {
        None => spinner("Loading users..."),
        Some(Err(message)) => html! { <p class="form-error">{message.clone()}</p> },
        Some(Ok(result)) => {
            let pagination = &result.pagination;
            html! {
                <>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Email"}</th>
                                <th>{"Role"}</th>
                                <th>{"Status"}</th>
                                <th>{"Created"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{ for result.users.iter().map(row) }</tbody>
                    </table>
                    <div class="pagination">
                        <button disabled={!pagination.has_prev} onclick={go_to(pagination.page.saturating_sub(1))}>
                            {"Previous"}
                        </button>
                        <span>{format!("Page {} of {} ({} users)", pagination.page, pagination.pages.max(1), pagination.total)}</span>
                        <button disabled={!pagination.has_next} onclick={go_to(pagination.page + 1)}>
                            {"Next"}
                        </button>
                    </div>
                </>
            }
        }
    };

    html! {
        <section class="user-management">
            if let Some(stats) = *stats {
                <div class="stat-grid">
                    <div class="stat-card"><span class="stat-label">{"Total"}</span><span class="stat-value">{stats.total_users.to_string()}</span></div>
                    <div class="stat-card"><span class="stat-label">{"Active"}</span><span class="stat-value">{stats.active_users.to_string()}</span></div>
                    <div class="stat-card"><span class="stat-label">{"Inactive"}</span><span class="stat-value">{stats.inactive_users.to_string()}</span></div>
                    <div class="stat-card"><span class="stat-label">{"Admins"}</span><span class="stat-value">{stats.admin_users.to_string()}</span></div>
                </div>
            }
            <div class="page-toolbar">
                <input type="search" placeholder="Search users..." value={(*search).clone()} oninput={on_search} />
                <button class="btn-primary" onclick={toggle_create}>
                    { if *show_create { "Close" } else { "Add user" } }
                </button>
            </div>
            if *show_create {
                {create_form}
            }
            {table}
        </section>
    }
}

/// Rows only match the signed-in account when both sides carry an id
fn is_same_account(me: Option<&ManagedUser>, row: &ManagedUser) -> bool {
    match (me.and_then(|me| me.id), row.id) {
        (Some(mine), Some(theirs)) => mine == theirs,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: Option<i64>) -> ManagedUser {
        ManagedUser { id, email: format!("{:?}@b.com", id), ..Default::default() }
    }

    #[test]
    fn rows_without_ids_are_never_the_current_account() {
        assert!(!is_same_account(Some(&account(None)), &account(None)));
        assert!(!is_same_account(None, &account(None)));
        assert!(!is_same_account(Some(&account(Some(1))), &account(None)));
        assert!(!is_same_account(Some(&account(Some(1))), &account(Some(2))));
        assert!(is_same_account(Some(&account(Some(1))), &account(Some(1))));
    }
}
