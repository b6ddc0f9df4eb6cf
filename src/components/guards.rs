// ============================================================================
// GUARDED - Renders children, a waiting screen, or navigates away
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::spinner;
use crate::hooks::use_session;
use crate::routing::{GuardDecision, LoginQuery, RouteGuard};

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    pub policy: RouteGuard,
    pub children: Children,
}

#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let requested = use_location().map(|l| l.path().to_string()).unwrap_or_default();
    let decision = props.policy.evaluate(&session.session, &requested);

    use_effect_with(decision.clone(), move |decision| {
        if let (GuardDecision::Redirect { to, return_to }, Some(navigator)) = (decision, navigator) {
            match return_to {
                Some(from) => {
                    let query = LoginQuery { from: Some(from.clone()) };
                    if let Err(e) = navigator.replace_with_query(to, &query) {
                        log::warn!("⚠️ Could not keep return path {}: {}", from, e);
                        navigator.replace(to);
                    }
                }
                None => navigator.replace(to),
            }
        }
        || ()
    });

    match decision {
        GuardDecision::Pending => spinner(props.policy.waiting_message()),
        GuardDecision::Allow => html! { <>{props.children.clone()}</> },
        GuardDecision::Redirect { .. } => html! {},
    }
}
