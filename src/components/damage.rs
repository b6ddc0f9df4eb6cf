use yew::prelude::*;

use super::spinner;
use crate::hooks::use_damages;
use crate::utils::format_date;

#[function_component(DamagePage)]
pub fn damage_page() -> Html {
    let damages = use_damages();
    let refresh = damages.refetch.reform(|_: MouseEvent| ());

    if damages.loading {
        return spinner("Loading damages...");
    }

    html! {
        <section class="damage-page">
            <div class="page-toolbar">
                <span>{format!(
                    "{} damaged items, {} pending",
                    damages.data.total_damages, damages.data.total_pending_damages
                )}</span>
                <button class="btn-secondary" onclick={refresh}>{"Refresh"}</button>
            </div>
            if let Some(error) = damages.error.clone() {
                <p class="form-error">{error}</p>
            }
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Product"}</th>
                        <th>{"Quantity"}</th>
                        <th>{"Description"}</th>
                        <th>{"Status"}</th>
                        <th>{"Reported"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for damages.data.damaged_items.iter().map(|item| html! {
                        <tr class={if item.is_pending() { "pending" } else { "" }}>
                            <td>{item.product_name.clone().unwrap_or_default()}</td>
                            <td>{item.quantity.map(|q| q.to_string()).unwrap_or_default()}</td>
                            <td>{item.description.clone().unwrap_or_default()}</td>
                            <td>{item.status.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                            <td>{format_date(item.created_at.as_deref())}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}
