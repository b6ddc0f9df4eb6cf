pub mod app;
pub mod damage;
pub mod dashboard;
pub mod forgot_password;
pub mod guards;
pub mod header;
pub mod login;
pub mod logout_button;
pub mod profile;
pub mod reset_password;
pub mod section_page;
pub mod shell;
pub mod toaster;
pub mod user_management;

pub use app::App;
pub use damage::DamagePage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use guards::Guarded;
pub use header::Header;
pub use login::LoginPage;
pub use logout_button::LogoutButton;
pub use profile::ProfilePage;
pub use reset_password::ResetPasswordPage;
pub use section_page::SectionPage;
pub use shell::Shell;
pub use toaster::Toaster;
pub use user_management::UserManagementPage;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Current text of the input that fired `e`
pub(crate) fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub(crate) fn spinner(message: &str) -> Html {
    html! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}
