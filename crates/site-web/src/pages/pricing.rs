//! Pricing Pages

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use pricing_core::PricingCategory;

use crate::components::PricingMenu;

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing">
            <h1>"Pricing"</h1>
            <p class="subtitle">"Pick a category to see packages"</p>
            <PricingMenu />
        </div>
    }
}

/// Page for a single category, selected by the `:slug` route segment
#[component]
pub fn PricingCategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category = move || {
        params
            .read()
            .get("slug")
            .and_then(|slug| PricingCategory::from_slug(&slug))
    };

    view! {
        <div class="pricing">
            <PricingMenu />
            {move || match category() {
                Some(category) => view! {
                    <h1>{category.name()}</h1>
                    <p class="subtitle">{format!("{} packages", category.name())}</p>
                }
                .into_any(),
                None => view! { <p>"Unknown pricing category"</p> }.into_any(),
            }}
        </div>
    }
}
