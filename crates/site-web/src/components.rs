//! UI Components

use leptos::prelude::*;

use crate::catalog::catalog;

/// Navigation list with one link per pricing category
#[component]
pub fn PricingMenu() -> impl IntoView {
    let items = catalog()
        .list()
        .iter()
        .map(|option| {
            view! {
                <li>
                    <a href=option.href.clone()>{option.name.clone()}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="pricing-menu">
            <ul>{items}</ul>
        </nav>
    }
}
