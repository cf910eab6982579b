//! Top navigation bar with section links and the session menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::toast_host::use_toasts;
use crate::state::auth::AuthState;

/// Section links shown to signed-in users, as `(href, label)`.
const SECTIONS: [(&str, &str); 5] = [
    ("/", "Resumes"),
    ("/tasks", "Matching"),
    ("/weights", "Weights"),
    ("/files", "Files"),
    ("/audit", "Audit"),
];

/// Navigation bar. Hidden entirely until a user is signed in.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();

    let user_label = move || {
        auth.get()
            .user
            .map(|u| u.label().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let toasts = toasts.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout().await {
                    leptos::logging::warn!("logout failed: {e}");
                }
                crate::util::session::clear_token();
                auth.set(AuthState::signed_out(crate::state::auth::AuthStatus::SignedOut));
                toasts.info("Signed out.");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &toasts;
        }
    };

    view! {
        <Show when=move || auth.get().is_authenticated()>
            <nav class="nav-bar">
                <span class="nav-bar__brand">"Resume Desk"</span>
                <ul class="nav-bar__links">
                    {SECTIONS
                        .iter()
                        .map(|(href, label)| view! { <li><A href=*href>{*label}</A></li> })
                        .collect::<Vec<_>>()}
                </ul>
                <span class="nav-bar__spacer"></span>
                <span class="nav-bar__user">{user_label}</span>
                <button class="btn" on:click=on_logout.clone()>
                    "Sign out"
                </button>
            </nav>
        </Show>
    }
}
