//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::provider::AuthProvider;
use crate::pages::home::HomePage;
use crate::state::session::SessionState;

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
/// Provides the external session signal, starts the session watcher, and
/// wraps routing in the auth provider.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session signal is written only by the watcher; the auth provider
    // observes it through context.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    crate::net::session::spawn_session_watcher(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/moondig.css"/>
        <Title text="Moon Dig"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
