//! Landing page with the wallet-connect hero and session controls.

use leptos::prelude::*;

use crate::auth::provider::AuthContext;

/// Landing page — the hero links out to the wallet authorization flow; a
/// signed-in visitor sees their handle and a sign-out control instead.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state();
    let connect_url = RwSignal::new(None::<String>);
    let status = RwSignal::new(String::new());

    // The connect destination is environment-configured server-side.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(url) = crate::net::api::get_redirection_url().await {
                connect_url.set(Some(url));
            }
        });
    });

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.sign_out().await {
                Ok(()) => status.set(String::new()),
                Err(err) => status.set(format!("Sign out failed: {err}")),
            }
        });
    };

    view! {
        <main class="home-page">
            <div class="home-page__hero">
                <a href=move || connect_url.get().unwrap_or_else(|| "/".to_owned())>
                    <img class="home-page__moon" src="/static/images/moon.png" alt="moon"/>
                </a>
            </div>

            <Show when=move || state.get().loading>
                <p class="home-page__status">"Checking session..."</p>
            </Show>

            <Show when=move || state.get().user.is_some()>
                <div class="home-page__session">
                    <p class="home-page__handle">
                        {move || state.get().user.map(|u| u.handle).unwrap_or_default()}
                    </p>
                    <button class="btn" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </div>
            </Show>

            <Show when=move || !status.get().is_empty()>
                <p class="home-page__error">{move || status.get()}</p>
            </Show>
        </main>
    }
}
