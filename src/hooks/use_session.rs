// ============================================================================
// USE SESSION HOOK - SessionStore shared through Yew context
// ============================================================================
// The provider owns the single SessionStore, runs the startup session check
// and re-renders consumers whenever the store notifies.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::{Session, SessionStore};

/// What consumers see: the shared store plus the snapshot of this render
#[derive(Clone)]
pub struct SessionContext {
    pub store: Rc<SessionStore>,
    pub session: Session,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.session == other.session
    }
}

impl SessionContext {
    pub fn client(&self) -> ApiClient {
        self.store.client().clone()
    }

    /// Logs out in the background, then runs `on_done`
    pub fn logout(&self, on_done: Callback<()>) {
        let store = self.store.clone();
        wasm_bindgen_futures::spawn_local(async move {
            store.logout().await;
            on_done.emit(());
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
    /// Overrides the browser client
    #[prop_or_default]
    pub client: Option<ApiClient>,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = {
        let client = props.client.clone();
        use_memo((), move |_| SessionStore::new(client.unwrap_or_else(ApiClient::browser)))
    };
    let session = use_state(|| store.snapshot());

    {
        let store = store.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let subscription = {
                let session = session.clone();
                store.subscribe(move |snapshot| session.set(snapshot.clone()))
            };
            session.set(store.snapshot());

            let checker = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                checker.check_session().await;
            });

            move || store.unsubscribe(subscription)
        });
    }

    let context = SessionContext { store, session: (*session).clone() };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session called outside SessionProvider")
}
