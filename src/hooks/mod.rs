pub mod use_damages;
pub mod use_notifications;
pub mod use_polling;
pub mod use_session;
pub mod use_toasts;

pub use use_damages::use_damages;
pub use use_notifications::use_notifications;
pub use use_polling::{use_polling, FetchFn, UsePollingHandle};
pub use use_session::{use_session, SessionContext, SessionProvider};
pub use use_toasts::{use_toasts, ToastContext, ToastProvider};
