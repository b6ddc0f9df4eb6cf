use yew::prelude::*;

use crate::hooks::{use_damages, use_session};
use crate::models::DashboardStats;
use crate::state::LoadGuard;
use crate::viewmodels::UsersViewModel;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let damages = use_damages();
    let stats = use_state(|| None::<DashboardStats>);
    let is_admin = session.session.is_admin();

    {
        let stats = stats.clone();
        let vm = UsersViewModel::new(session.client());
        use_effect_with(is_admin, move |&is_admin| {
            let guard = LoadGuard::new();
            if is_admin {
                let guard = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = vm.stats().await;
                    guard.apply(loaded, |loaded| stats.set(loaded));
                });
            }
            move || guard.cancel()
        });
    }

    let greeting = session
        .session
        .user
        .as_ref()
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_default();

    html! {
        <section class="dashboard">
            <h2>{greeting}</h2>
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-label">{"Total damages"}</span>
                    <span class="stat-value">
                        { if damages.loading { "…".to_string() } else { damages.data.total_damages.to_string() } }
                    </span>
                </div>
                <div class="stat-card warning">
                    <span class="stat-label">{"Pending damages"}</span>
                    <span class="stat-value">
                        { if damages.loading { "…".to_string() } else { damages.data.total_pending_damages.to_string() } }
                    </span>
                </div>
                if let Some(stats) = *stats {
                    <div class="stat-card">
                        <span class="stat-label">{"Users"}</span>
                        <span class="stat-value">{stats.total_users.to_string()}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">{"Active users"}</span>
                        <span class="stat-value">{stats.active_users.to_string()}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">{"Administrators"}</span>
                        <span class="stat-value">{stats.admin_users.to_string()}</span>
                    </div>
                }
            </div>
            if let Some(error) = damages.error.clone() {
                <p class="form-error">{error}</p>
            }
        </section>
    }
}
