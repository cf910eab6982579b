//! Login page with username/password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes send visitors here with `?redirect=<path>`; after a
//! successful sign-in the page navigates back to that path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::toast_host::use_toasts;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::auth::{REDIRECT_PARAM, post_login_destination};

/// Trim and check the login form.
fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let destination = move || post_login_destination(query.read().get(REDIRECT_PARAM).as_deref());

    // Already signed in (or just signed in): leave the login page.
    let navigate_away = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.is_loading() && state.is_authenticated() {
            navigate_away(&destination(), NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_login_input(&username.get(), &password.get()) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let toasts = toasts.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&req).await {
                    Ok(session) => {
                        if let Some(token) = session.access_token.as_deref() {
                            crate::util::session::store_token(token);
                        }
                        toasts.success(format!("Welcome back, {}.", session.user.label()));
                        info.set(String::new());
                        auth.set(AuthState::signed_in(session.user));
                    }
                    Err(e) => {
                        info.set(format!("Sign-in failed: {e}"));
                        toasts.error(e.to_string());
                    }
                }
                password.set(String::new());
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (req, &toasts);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Resume Desk"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
