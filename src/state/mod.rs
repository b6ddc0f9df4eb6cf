pub mod load_guard;
pub mod poll_state;
pub mod reactivity;
pub mod session_state;
pub mod toast_state;

pub use load_guard::LoadGuard;
pub use poll_state::{poll_once, FetchTicket, PollSnapshot, Poller};
pub use reactivity::{ReactiveState, SubscriptionId};
pub use session_state::{AuthOutcome, Session, SessionStore};
pub use toast_state::{Toast, ToastKind, ToastStore};
