// ============================================================================
// SHELL - Sidebar, header and content area of every signed-in page
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::{Header, LogoutButton};
use crate::hooks::use_session;
use crate::routing::{Route, NAV_ITEMS};

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub route: Route,
    pub children: Children,
}

#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let session = use_session();
    let is_admin = session.session.is_admin();
    let user = session.session.user.clone();

    let links = NAV_ITEMS
        .iter()
        .filter(|item| is_admin || !item.admin_only)
        .map(|item| {
            let class = if item.route == props.route { "nav-link active" } else { "nav-link" };
            html! {
                <li key={item.label}>
                    <Link<Route> to={item.route} classes={class}>{item.label}</Link<Route>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <nav>
                    <ul class="nav-list">{links}</ul>
                </nav>
                if let Some(user) = user {
                    <div class="sidebar-user">
                        <span class="user-name">{user.display_name()}</span>
                        <span class="user-role">{user.role_label()}</span>
                    </div>
                }
                <LogoutButton />
            </aside>
            <div class="main-area">
                <Header title={props.route.title()} />
                <main class="page-content">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
