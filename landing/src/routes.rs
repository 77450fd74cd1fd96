// Concept routes: /1 .. /5, anything else is a not-found page

use landing_core::{ThemeId, content};
use landing_themes::ThemePage;
use landing_themes::styles::CATALOG_CSS;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ConceptRoute() -> impl IntoView {
    let params = use_params_map();

    move || {
        let segment = params.read().get("id").unwrap_or_default();
        match segment.parse::<ThemeId>() {
            Ok(id) => {
                tracing::debug!(theme = %id, name = id.meta().name, "opening concept");
                view! { <ThemePage id=id content=content().clone() /> }.into_any()
            }
            Err(err) => {
                tracing::warn!(%err, "no concept for route");
                view! { <NotFound /> }.into_any()
            }
        }
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <style>{CATALOG_CSS}</style>
            <div>
                <p class="catalog-eyebrow">"404"</p>
                <h1 class="catalog-heading">"No such concept"</h1>
                <a href="/">"← Back to all designs"</a>
            </div>
        </main>
    }
}
