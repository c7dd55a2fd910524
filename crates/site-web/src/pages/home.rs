//! Home Page

use leptos::prelude::*;

use crate::catalog::link;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Studio"</h1>
                <p class="tagline">"Portraits, weddings, oceans and canyons"</p>
                <div class="cta">
                    <a href=link("/pricing") class="btn btn-primary">"View Pricing"</a>
                </div>
            </header>
        </div>
    }
}
