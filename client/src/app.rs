//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::research::ResearchPage;
use crate::state::research::ResearchState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared research state context and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let research = RwSignal::new(ResearchState::default());
    provide_context(research);

    view! {
        <Stylesheet id="leptos" href="/pkg/scout.css"/>
        <Title text="Scout"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ResearchPage/>
            </Routes>
        </Router>
    }
}
