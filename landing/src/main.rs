// Casa Automata landing concepts, browser build

mod routes;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use landing_core::content;
use landing_themes::CatalogPage;
use routes::{ConceptRoute, NotFound};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = content().validate() {
        tracing::warn!(%err, "landing copy has an empty list; the section renders without items");
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=CatalogPage />
                <Route path=path!("/:id") view=ConceptRoute />
            </Routes>
        </Router>
    }
}
