// ============================================================================
// USE TOASTS HOOK - ToastStore shared through Yew context
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::state::{Toast, ToastStore};
use crate::viewmodels::Feedback;

#[derive(Clone)]
pub struct ToastContext {
    pub store: Rc<ToastStore>,
    pub toasts: Vec<Toast>,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.toasts == other.toasts
    }
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.store.success(message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.store.error(message);
    }

    pub fn show(&self, feedback: Feedback) {
        match feedback {
            Feedback::Success(message) => self.success(message),
            Feedback::Error(message) => self.error(message),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.store.dismiss(id);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let store = use_memo((), |_| ToastStore::new());
    let toasts = use_state(|| store.current());

    {
        let store = store.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            let subscription = store.subscribe(move |current| toasts.set(current.clone()));
            move || store.unsubscribe(subscription)
        });
    }

    let context = ToastContext { store, toasts: (*toasts).clone() };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("use_toasts called outside ToastProvider")
}
