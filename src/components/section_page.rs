use yew::prelude::*;

use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub route: Route,
}

/// Placeholder body for sections whose data views live outside this client
#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    html! {
        <section class="section-page">
            <h2>{props.route.title()}</h2>
            <p class="empty">{"No records to display yet."}</p>
        </section>
    }
}
