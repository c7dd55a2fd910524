//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::catalog::catalog;
use crate::pages::{HomePage, PricingCategoryPage, PricingPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let base = catalog().base_path().to_string();

    view! {
        <Router base=base>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/pricing/:slug") view=PricingCategoryPage />
                </Routes>
            </main>
        </Router>
    }
}
