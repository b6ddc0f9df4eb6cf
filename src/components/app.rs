use yew::prelude::*;
use yew_router::prelude::*;

use super::{
    DamagePage, DashboardPage, ForgotPasswordPage, Guarded, LoginPage, ProfilePage, ResetPasswordPage,
    SectionPage, Shell, Toaster, UserManagementPage,
};
use crate::hooks::{SessionProvider, ToastProvider};
use crate::routing::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <SessionProvider>
                    <Switch<Route> render={switch} />
                    <Toaster />
                </SessionProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword => html! { <ResetPasswordPage /> },
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
        protected => match protected.guard() {
            Some(policy) => html! {
                <Guarded {policy}>
                    <Shell route={protected}>
                        {page(protected)}
                    </Shell>
                </Guarded>
            },
            None => html! { <Redirect<Route> to={Route::Login} /> },
        },
    }
}

fn page(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Users => html! { <UserManagementPage /> },
        Route::Damage => html! { <DamagePage /> },
        other => html! { <SectionPage route={other} /> },
    }
}
